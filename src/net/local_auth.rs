//! Session provider that keeps the signed-in identity locally.
//!
//! Browser builds persist the session to `localStorage` so a reload keeps
//! the user signed in; sign-out clears it.

#[cfg(test)]
#[path = "local_auth_test.rs"]
mod local_auth_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::service::{AuthProvider, ServiceError};
use super::types::Session;
use crate::util::storage;

const STORAGE_KEY: &str = "chatroom_session";

#[derive(Default)]
pub struct LocalAuthProvider {
    session: Mutex<Option<Session>>,
    persist: bool,
}

impl LocalAuthProvider {
    /// Provider with no session and no persistence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider already signed in as `session`.
    pub fn with_session(session: Session) -> Self {
        Self { session: Mutex::new(Some(session)), persist: false }
    }

    /// Provider backed by `localStorage`, restoring any saved session.
    pub fn restore() -> Self {
        let saved = storage::load_json::<Session>(STORAGE_KEY);
        Self { session: Mutex::new(saved), persist: true }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuthProvider for LocalAuthProvider {
    fn session(&self) -> Option<Session> {
        self.lock().clone()
    }

    fn sign_in(&self, login_id: &str, username: &str) -> Result<Session, ServiceError> {
        let login_id = login_id.trim();
        if login_id.is_empty() {
            return Err(ServiceError::Auth("an email is required".to_owned()));
        }
        if !login_id.contains('@') {
            return Err(ServiceError::Auth(format!("'{login_id}' is not an email address")));
        }

        let username = username.trim();
        let session = Session {
            login_id: Some(login_id.to_owned()),
            username: (!username.is_empty()).then(|| username.to_owned()),
        };

        *self.lock() = Some(session.clone());
        if self.persist {
            storage::save_json(STORAGE_KEY, &session);
        }
        Ok(session)
    }

    fn sign_out(&self) {
        *self.lock() = None;
        if self.persist {
            storage::remove(STORAGE_KEY);
        }
    }
}
