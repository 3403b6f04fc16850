//! Utility helpers shared across chat UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure rendering rules and browser concerns from
//! component code to improve reuse and testability.

pub mod auth;
pub mod authorship;
pub mod avatar;
pub mod storage;
