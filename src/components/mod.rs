//! Chat UI components.

pub mod chat_header;
pub mod chat_view;
pub mod message_bubble;
pub mod message_input;
