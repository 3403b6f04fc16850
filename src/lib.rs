//! # chatroom
//!
//! Leptos + WASM chatroom view. The view subscribes to a live query of chat
//! records, mirrors each result set into render state, and appends new
//! records through an injected data service.
//!
//! Persistence, sync and authentication belong to the collaborators behind
//! the [`net::service::DataService`] and [`net::service::AuthProvider`]
//! traits. The bundled in-memory providers back the standalone build and the
//! tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the app with the bundled
/// providers and the page-embedded config.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    use crate::app::App;
    use crate::config::ChatConfig;
    use crate::net::local_auth::LocalAuthProvider;
    use crate::net::memory::MemoryDataService;
    use crate::net::service::Services;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let services = Services::new(Arc::new(MemoryDataService::new()), Arc::new(LocalAuthProvider::restore()));
    let config = ChatConfig::from_document();
    log::info!("chatroom starting: collection={}", config.collection);

    leptos::mount::mount_to_body(move || leptos::view! { <App services=services.clone() config=config.clone()/> });
}
