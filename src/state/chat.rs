//! Chat render state and the send path.
//!
//! DESIGN
//! ======
//! `messages` mirrors the live query: every notification replaces it
//! wholesale and nothing else writes to it. Sends never append to it; the
//! next notification is the only way a new message appears. Optimistic
//! entries live in the separate `pending` list.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::ChatConfig;
use crate::net::service::{CreateFuture, DataService, QueryEvent, ServiceError};
use crate::net::types::{Message, NewMessage, QueryNotification, Session};

/// Render state owned by one mounted chat view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Mirror of the latest live-query result set, in service order.
    pub messages: Vec<Message>,
    /// Sends awaiting their create result (optimistic mode only).
    pub pending: Vec<PendingMessage>,
    /// Text of the most recent failed send, shown until the next success or dismissal.
    pub send_error: Option<String>,
    /// Sync flag from the latest notification.
    pub synced: bool,
}

/// A sent message shown before the live query confirms it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMessage {
    /// Local key, unrelated to the record id the service assigns.
    pub key: String,
    pub draft: NewMessage,
}

/// A create request that has been issued but not yet resolved.
pub struct OutgoingMessage {
    pub key: String,
    pub draft: NewMessage,
    pub request: CreateFuture,
}

impl ChatState {
    /// Replace the mirrored list with the notification's items.
    ///
    /// Each record new to this notification confirms at most one pending
    /// entry with the same email and content.
    pub fn apply_notification(&mut self, notification: QueryNotification) {
        let previous = std::mem::replace(&mut self.messages, notification.items);
        self.synced = notification.is_synced;
        self.confirm_pending(&previous);
    }

    fn confirm_pending(&mut self, previous: &[Message]) {
        if self.pending.is_empty() {
            return;
        }
        for item in self.messages.iter().filter(|m| !previous.iter().any(|p| p.id == m.id)) {
            if let Some(pos) = self
                .pending
                .iter()
                .position(|p| p.draft.email == item.email && p.draft.content == item.content)
            {
                self.pending.remove(pos);
            }
        }
    }

    /// Apply a live-query event. Errors are logged and leave the list as is.
    ///
    /// Returns whether the state changed.
    pub fn apply_event(&mut self, event: QueryEvent) -> bool {
        match event {
            QueryEvent::Snapshot(notification) => {
                self.apply_notification(notification);
                true
            }
            QueryEvent::Error(e) => {
                leptos::logging::warn!("error observing messages: {e}");
                false
            }
        }
    }

    pub fn push_pending(&mut self, staged: PendingMessage) {
        self.pending.push(staged);
    }

    /// Record the outcome of the send identified by `key`.
    pub fn settle_send(&mut self, key: &str, result: Result<(), ServiceError>) {
        self.pending.retain(|p| p.key != key);
        match result {
            Ok(()) => self.send_error = None,
            Err(e) => self.send_error = Some(e.to_string()),
        }
    }

    pub fn dismiss_send_error(&mut self) {
        self.send_error = None;
    }
}

/// Build the create payload for `input`, or `None` when it is blank.
pub fn prepare_send(input: &str, session: Option<&Session>, unknown_user: &str) -> Option<NewMessage> {
    let content = input.trim();
    if content.is_empty() {
        return None;
    }

    let email = session.and_then(|s| s.login_id.clone()).unwrap_or_default();
    let user_name = session
        .and_then(|s| s.username.clone())
        .unwrap_or_else(|| unknown_user.to_owned());

    Some(NewMessage { content: content.to_owned(), email, user_name })
}

/// Key the create payload for `input` without sending it.
///
/// Blank input yields `None`: nothing is sent and the input stays untouched.
pub fn stage_send(input: &str, session: Option<&Session>, config: &ChatConfig) -> Option<PendingMessage> {
    let draft = prepare_send(input, session, &config.unknown_user_name)?;
    Some(PendingMessage { key: uuid::Uuid::new_v4().to_string(), draft })
}

/// Issue the create request for `staged` and clear `input`.
///
/// The input is cleared as soon as the request is issued, independent of
/// its eventual outcome.
pub fn issue_send(
    staged: PendingMessage,
    input: &mut String,
    config: &ChatConfig,
    data: &dyn DataService,
) -> OutgoingMessage {
    let request = data.create(&config.collection, staged.draft.clone());
    input.clear();

    OutgoingMessage { key: staged.key, draft: staged.draft, request }
}
