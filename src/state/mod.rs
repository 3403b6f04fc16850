//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`) so components depend on small
//! focused models. Each is provided as an `RwSignal` context by `App`.

pub mod auth;
pub mod chat;
