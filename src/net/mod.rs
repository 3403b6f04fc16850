//! Collaborator boundary: record types, service traits and bundled providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the record schema, `service` the injected traits and the
//! subscription handle, `memory` and `local_auth` the in-process providers
//! used by the standalone build and by tests.

pub mod local_auth;
pub mod memory;
pub mod service;
pub mod types;
