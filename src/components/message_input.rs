//! Composer row: text field plus send button.

use leptos::prelude::*;

/// Text input bound to `input`. Enter (without Shift) and the button both
/// call `on_send`; the button is disabled while the trimmed text is empty.
#[component]
pub fn MessageInput(input: RwSignal<String>, on_send: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-input-row">
            <input
                class="chat-input"
                type="text"
                placeholder="Type your message..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary chat-send" on:click=move |_| on_send.run(()) disabled=move || !can_send()>
                "Send"
            </button>
        </div>
    }
}
