//! Live chat view: mirrors the message feed and sends new messages.
//!
//! LIFECYCLE
//! =========
//! The view owns its `ChatState` signal and opens one live query when it is
//! created. Unmount releases the query in `on_cleanup` and disposes the
//! signal with the view's owner, so neither feed events nor late send
//! results reach the state afterwards, and a remount starts empty.

#[cfg(test)]
#[path = "chat_view_test.rs"]
mod chat_view_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::chat_header::ChatHeader;
use crate::components::message_bubble::MessageBubble;
use crate::components::message_input::MessageInput;
use crate::config::ChatConfig;
use crate::net::service::{DataService, QueryEvent, QueryHandler, Services, Subscription};
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, issue_send, stage_send};
use crate::util::authorship::{Alignment, alignment_for};

/// Open the live query and mirror every event into `chat`.
fn open_feed(data: &dyn DataService, collection: &str, chat: RwSignal<ChatState>) -> Subscription {
    let handler: QueryHandler = Arc::new(move |event: QueryEvent| {
        let _ = chat.try_maybe_update(|c| {
            let changed = c.apply_event(event);
            (changed, ())
        });
    });
    data.observe(collection, handler)
}

/// Create the view's chat state and mirror the live query into it until the
/// current owner is cleaned up.
fn open_chat(data: &dyn DataService, collection: &str) -> RwSignal<ChatState> {
    let chat = RwSignal::new(ChatState::default());
    let subscription = open_feed(data, collection, chat);
    on_cleanup(move || subscription.unsubscribe());
    chat
}

#[component]
pub fn ChatView() -> impl IntoView {
    let services = expect_context::<Services>();
    let config = expect_context::<ChatConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let chat = open_chat(services.data.as_ref(), &config.collection);
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.pending.len()));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_send = Callback::new(move |()| {
        let session = auth.with_untracked(|a| a.session.clone());
        let mut text = input.get_untracked();
        let Some(staged) = stage_send(&text, session.as_ref(), &config) else {
            return;
        };

        // Must be pending before `create`, which may notify synchronously.
        if config.optimistic_send {
            chat.update(|c| c.push_pending(staged.clone()));
        }

        let outgoing = issue_send(staged, &mut text, &config, services.data.as_ref());
        input.set(text);

        let key = outgoing.key;
        let request = outgoing.request;
        leptos::task::spawn_local(async move {
            let result = request.await;
            if let Err(e) = &result {
                leptos::logging::warn!("send failed: {e}");
            }
            let _ = chat.try_update(|c| c.settle_send(&key, result.map(|_| ())));
        });
    });

    let dismiss_error = move |_| {
        let _ = chat.try_update(ChatState::dismiss_send_error);
    };

    view! {
        <main class="chat-view">
            <ChatHeader/>

            <div class="chat-view__messages" node_ref=messages_ref>
                {move || {
                    let state = chat.get();
                    if state.messages.is_empty() && state.pending.is_empty() {
                        let note = if state.synced { "No messages yet" } else { "Loading messages..." };
                        return view! { <div class="chat-view__empty">{note}</div> }.into_any();
                    }

                    let session = auth.with(|a| a.session.clone());
                    let confirmed = state
                        .messages
                        .iter()
                        .map(|msg| {
                            view! {
                                <MessageBubble
                                    email=msg.email.clone()
                                    content=msg.content.clone()
                                    alignment=alignment_for(msg, session.as_ref())
                                />
                            }
                        })
                        .collect::<Vec<_>>();
                    let pending = state
                        .pending
                        .iter()
                        .map(|p| {
                            view! {
                                <MessageBubble
                                    email=p.draft.email.clone()
                                    content=p.draft.content.clone()
                                    alignment=Alignment::Right
                                    pending=true
                                />
                            }
                        })
                        .collect::<Vec<_>>();

                    view! { {confirmed} {pending} }.into_any()
                }}
            </div>

            {move || {
                chat.with(|c| c.send_error.clone())
                    .map(|err| {
                        view! {
                            <div class="chat-view__error" role="alert">
                                <span>{err}</span>
                                <button class="btn btn--ghost" on:click=dismiss_error>"Dismiss"</button>
                            </div>
                        }
                    })
            }}

            <MessageInput input=input on_send=on_send/>
        </main>
    }
}
