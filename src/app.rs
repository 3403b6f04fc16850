//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ChatConfig;
use crate::net::service::Services;
use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Takes the collaborator handles explicitly and provides them, together
/// with the shared auth signal, to every child component.
#[component]
pub fn App(services: Services, #[prop(optional)] config: Option<ChatConfig>) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { session: services.auth.session(), loading: false });

    provide_context(services);
    provide_context(config.unwrap_or_default());
    provide_context(auth);

    view! {
        <Stylesheet id="chatroom" href="/pkg/chatroom.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
