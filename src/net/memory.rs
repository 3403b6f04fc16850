//! In-process data service with live-query semantics.
//!
//! Every observer receives the full ordered record list when it subscribes
//! and again after every mutation, matching how a managed live query pushes
//! whole result sets. Used by the standalone build and as the test double.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::service::{CreateFuture, DataService, QueryEvent, QueryHandler, ServiceError, Subscription, gate};
use super::types::{Message, NewMessage, QueryNotification};

#[derive(Default)]
struct Inner {
    records: HashMap<String, Vec<Message>>,
    observers: BTreeMap<u64, (String, QueryHandler)>,
    next_observer: u64,
    next_record: u64,
    fail_next_create: Option<String>,
    create_calls: Vec<(String, NewMessage)>,
}

impl Inner {
    fn snapshot(&self, collection: &str) -> QueryNotification {
        QueryNotification { items: self.records.get(collection).cloned().unwrap_or_default(), is_synced: true }
    }

    fn observers_of(&self, collection: &str) -> Vec<QueryHandler> {
        self.observers
            .values()
            .filter(|(c, _)| c == collection)
            .map(|(_, h)| Arc::clone(h))
            .collect()
    }
}

/// Shared in-memory record store. Clones share the same records and observers.
#[derive(Clone, Default)]
pub struct MemoryDataService {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryDataService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace every record in `collection`, as if written by other clients,
    /// and notify observers.
    pub fn replace_all(&self, collection: &str, items: Vec<Message>) {
        let (handlers, snapshot) = {
            let mut inner = self.lock();
            inner.records.insert(collection.to_owned(), items);
            (inner.observers_of(collection), inner.snapshot(collection))
        };
        notify(&handlers, &QueryEvent::Snapshot(snapshot));
    }

    /// Report a live-query failure to every observer of `collection`.
    pub fn emit_error(&self, collection: &str, reason: &str) {
        let handlers = self.lock().observers_of(collection);
        notify(&handlers, &QueryEvent::Error(ServiceError::Subscription(reason.to_owned())));
    }

    /// Make the next create request fail with `reason`.
    pub fn fail_next_create(&self, reason: &str) {
        self.lock().fail_next_create = Some(reason.to_owned());
    }

    /// Every create request received so far, in call order.
    pub fn create_calls(&self) -> Vec<(String, NewMessage)> {
        self.lock().create_calls.clone()
    }

    /// Number of observers currently attached to `collection`.
    pub fn observer_count(&self, collection: &str) -> usize {
        self.lock().observers.values().filter(|(c, _)| c == collection).count()
    }

    pub fn records(&self, collection: &str) -> Vec<Message> {
        self.lock().records.get(collection).cloned().unwrap_or_default()
    }
}

fn notify(handlers: &[QueryHandler], event: &QueryEvent) {
    for handler in handlers {
        handler(event.clone());
    }
}

fn detach(inner: &Weak<Mutex<Inner>>, id: u64) {
    if let Some(inner) = inner.upgrade() {
        inner.lock().unwrap_or_else(PoisonError::into_inner).observers.remove(&id);
    }
}

impl DataService for MemoryDataService {
    fn observe(&self, collection: &str, handler: QueryHandler) -> Subscription {
        let (active, gated) = gate(handler);
        let (id, snapshot) = {
            let mut inner = self.lock();
            let id = inner.next_observer;
            inner.next_observer += 1;
            inner.observers.insert(id, (collection.to_owned(), Arc::clone(&gated)));
            (id, inner.snapshot(collection))
        };

        gated(QueryEvent::Snapshot(snapshot));

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(active, move || detach(&weak, id))
    }

    fn create(&self, collection: &str, draft: NewMessage) -> CreateFuture {
        let outcome = {
            let mut inner = self.lock();
            inner.create_calls.push((collection.to_owned(), draft.clone()));
            if let Some(reason) = inner.fail_next_create.take() {
                Err(ServiceError::Create(reason))
            } else {
                inner.next_record += 1;
                let message = Message {
                    id: format!("{}-{}", collection.to_lowercase(), inner.next_record),
                    content: draft.content,
                    email: draft.email,
                    user_name: draft.user_name,
                    created_at: None,
                    updated_at: None,
                };
                inner.records.entry(collection.to_owned()).or_default().push(message.clone());
                Ok((message, inner.observers_of(collection), inner.snapshot(collection)))
            }
        };

        let result = outcome.map(|(message, handlers, snapshot)| {
            notify(&handlers, &QueryEvent::Snapshot(snapshot));
            message
        });
        Box::pin(futures::future::ready(result))
    }
}
