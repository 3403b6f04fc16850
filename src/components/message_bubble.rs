//! One row of the message list: sender avatar plus the message bubble.

use leptos::prelude::*;

use crate::config::ChatConfig;
use crate::util::authorship::Alignment;
use crate::util::avatar::{avatar_color, avatar_letter};

/// Round badge showing the sender's initial on a palette color.
#[component]
pub fn Avatar(#[prop(into)] email: String) -> impl IntoView {
    let config = use_context::<ChatConfig>().unwrap_or_default();
    let color = avatar_color(&email, &config.palette).to_owned();
    let letter = avatar_letter(&email);

    view! {
        <div class="avatar" style:background-color=color>
            {letter}
        </div>
    }
}

/// A chat bubble. Right-aligned rows reverse the avatar/bubble order and use
/// the accent styling.
#[component]
pub fn MessageBubble(
    #[prop(into)] email: String,
    #[prop(into)] content: String,
    alignment: Alignment,
    /// Not yet confirmed by the live query.
    #[prop(optional)]
    pending: bool,
) -> impl IntoView {
    let mut row_class = String::from("message-row");
    if alignment == Alignment::Right {
        row_class.push_str(" message-row--own");
    }
    if pending {
        row_class.push_str(" message-row--pending");
    }

    view! {
        <div class=row_class>
            <Avatar email=email.clone()/>
            <div class="message-bubble">
                <p class="message-bubble__sender">{email}</p>
                <p class="message-bubble__content">{content}</p>
            </div>
        </div>
    }
}
