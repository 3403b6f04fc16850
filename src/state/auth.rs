//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-aware components to coordinate login
//! redirects, message alignment and the create payload's sender fields.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state tracking the current session and loading status.
///
/// Provided to the component tree as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Login id of the signed-in user, if any.
    pub fn login_id(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.login_id.as_deref())
    }
}
