//! Sign-in page collecting an email and display name.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::service::Services;
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match services.auth.sign_in(&email.get_untracked(), &name.get_untracked()) {
            Ok(session) => {
                auth.update(|a| a.session = Some(session));
                info.set(String::new());
                navigate("/", NavigateOptions::default());
            }
            Err(e) => {
                leptos::logging::warn!("sign-in rejected: {e}");
                info.set(e.to_string());
            }
        }
    };

    view! {
        <Title text="Sign in"/>
        <div class="login-page">
            <h1>"Chatroom"</h1>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-form__input"
                    type="text"
                    placeholder="Display name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Sign in"</button>
            </form>
            <p class="login-page__info">{move || info.get()}</p>
        </div>
    }
}
