//! Routed pages.

pub mod chat;
pub mod login;
