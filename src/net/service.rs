//! Collaborator seams for the data service and the auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat view never talks to a backend directly. The embedding app builds
//! concrete implementations and hands them to the component tree as
//! [`Services`], so tests and demos can substitute in-process doubles.
//!
//! ERROR HANDLING
//! ==============
//! Mutations return explicit `Result`s. Live-query failures arrive in-band
//! as [`QueryEvent::Error`] and never tear down the subscription handle.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::LocalBoxFuture;

use super::types::{Message, NewMessage, QueryNotification, Session};

/// Errors surfaced by data-service and auth-provider calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The live query reported a failure.
    #[error("subscription failed: {0}")]
    Subscription(String),
    /// A create-record request was rejected or could not be delivered.
    #[error("create failed: {0}")]
    Create(String),
    /// Sign-in was rejected.
    #[error("authentication failed: {0}")]
    Auth(String),
    /// The collaborator is not reachable at all.
    #[error("service unavailable")]
    Unavailable,
}

/// Event delivered to a live-query observer.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryEvent {
    Snapshot(QueryNotification),
    Error(ServiceError),
}

/// Observer callback registered with [`DataService::observe`].
pub type QueryHandler = Arc<dyn Fn(QueryEvent) + Send + Sync>;

/// Result future of [`DataService::create`]. Local because browser transports
/// are `!Send`.
pub type CreateFuture = LocalBoxFuture<'static, Result<Message, ServiceError>>;

/// Live-query and mutation API of the record store.
pub trait DataService: Send + Sync {
    /// Open a live query over every record in `collection`.
    ///
    /// The handler receives the full ordered result set each time it changes.
    /// Delivery stops once the returned handle is released.
    fn observe(&self, collection: &str, handler: QueryHandler) -> Subscription;

    /// Request creation of a new record in `collection`.
    fn create(&self, collection: &str, draft: NewMessage) -> CreateFuture;
}

/// Session source and sign-in/sign-out actions.
pub trait AuthProvider: Send + Sync {
    /// Current session, if signed in.
    fn session(&self) -> Option<Session>;

    /// Start a session for the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Auth`] when the identity is rejected.
    fn sign_in(&self, login_id: &str, username: &str) -> Result<Session, ServiceError>;

    /// End the current session. A no-op when already signed out.
    fn sign_out(&self);
}

/// Injected collaborator handles shared through Leptos context.
#[derive(Clone)]
pub struct Services {
    pub data: Arc<dyn DataService>,
    pub auth: Arc<dyn AuthProvider>,
}

impl Services {
    pub fn new(data: Arc<dyn DataService>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { data, auth }
    }
}

/// Handle to an open live query.
///
/// Released exactly once, by [`Subscription::unsubscribe`] or on drop. Once
/// released, the gated handler drops any event the feed still emits.
pub struct Subscription {
    active: Arc<AtomicBool>,
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Build a handle from the flag returned by [`gate`] and a release hook
    /// that detaches the observer from the feed.
    pub fn new<F>(active: Arc<AtomicBool>, release: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self { active, release: Some(Box::new(release)) }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stop delivery and detach from the feed.
    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish_non_exhaustive()
    }
}

/// Wrap `handler` so it only forwards events while the returned flag is set.
///
/// Feed implementations register the gated handler and pass the flag to
/// [`Subscription::new`].
pub fn gate(handler: QueryHandler) -> (Arc<AtomicBool>, QueryHandler) {
    let active = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&active);
    let gated: QueryHandler = Arc::new(move |event: QueryEvent| {
        if flag.load(Ordering::SeqCst) {
            handler(event);
        }
    });
    (active, gated)
}
