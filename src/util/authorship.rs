//! Per-message authorship classification.

#[cfg(test)]
#[path = "authorship_test.rs"]
mod authorship_test;

use crate::net::types::{Message, Session};

/// Which side of the message list a bubble sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Messages from other senders.
    Left,
    /// Messages sent by the signed-in user.
    Right,
}

/// Whether `message` was sent by the signed-in user.
///
/// A session without a login id owns nothing, including messages whose
/// stored email is empty.
pub fn is_own_message(message: &Message, session: Option<&Session>) -> bool {
    session
        .and_then(|s| s.login_id.as_deref())
        .is_some_and(|login_id| message.email == login_id)
}

pub fn alignment_for(message: &Message, session: Option<&Session>) -> Alignment {
    if is_own_message(message, session) { Alignment::Right } else { Alignment::Left }
}
