//! Record and session DTOs exchanged with the data and auth collaborators.
//!
//! DESIGN
//! ======
//! Field names follow the camelCase record schema of the backing data
//! service so serde payloads stay lossless when an adapter forwards them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A persisted chat record as delivered by the live query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Opaque unique key assigned by the data service.
    pub id: String,
    /// Message body.
    pub content: String,
    /// Sender identifier (the sender's login email).
    #[serde(default)]
    pub email: String,
    /// Sender display name.
    #[serde(default)]
    pub user_name: String,
    /// Service-managed creation timestamp, if the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Service-managed last-update timestamp, if the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Fields supplied by the client when creating a new record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub content: String,
    pub email: String,
    pub user_name: String,
}

/// One live-query notification: the full current result set, in service order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryNotification {
    pub items: Vec<Message>,
    /// Whether the service considers the result set fully synchronized.
    #[serde(default)]
    pub is_synced: bool,
}

/// Identity of the signed-in user as reported by the auth provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Email-like login identifier.
    pub login_id: Option<String>,
    /// Account username.
    pub username: Option<String>,
}
