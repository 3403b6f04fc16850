//! Chat page: the room for the signed-in user.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::chat_view::ChatView;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let title = move || auth.with(|a| format!("{}'s chatroom", a.login_id().unwrap_or_default()));

    view! {
        <Title text=title/>
        <Show when=move || auth.with(|a| a.session.is_some())>
            <ChatView/>
        </Show>
    }
}
