//! Room heading with the signed-in identity and the sign-out control.

use leptos::prelude::*;

use crate::net::service::Services;
use crate::state::auth::AuthState;

#[component]
pub fn ChatHeader() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let room_label = move || auth.with(|a| format!("{}'s chatroom", a.login_id().unwrap_or_default()));

    let on_sign_out = move |_| {
        services.auth.sign_out();
        auth.update(|a| a.session = None);
        leptos::logging::log!("signed out");
    };

    view! {
        <header class="chat-header">
            <h1 class="chat-header__room">{room_label}</h1>
            <div class="chat-header__bar">
                <h2 class="chat-header__title">"Chatroom"</h2>
                <button class="btn btn--danger chat-header__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
