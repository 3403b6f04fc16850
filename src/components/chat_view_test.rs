use futures::executor::block_on;

use super::*;
use crate::net::memory::MemoryDataService;
use crate::net::service::ServiceError;
use crate::net::types::{Message, NewMessage};

const ROOM: &str = "Message";

fn message(id: &str, email: &str, content: &str) -> Message {
    Message {
        id: id.to_owned(),
        content: content.to_owned(),
        email: email.to_owned(),
        user_name: "u".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

/// Open the chat state under a fresh owner standing in for the mounted view.
fn mount(service: &MemoryDataService) -> (Owner, RwSignal<ChatState>) {
    let owner = Owner::new();
    let chat = owner.with(|| open_chat(service, ROOM));
    (owner, chat)
}

fn mirrored(chat: RwSignal<ChatState>) -> Vec<Message> {
    chat.with_untracked(|c| c.messages.clone())
}

// =============================================================
// Mounted
// =============================================================

#[test]
fn mount_subscribes_and_mirrors_initial_snapshot() {
    let service = MemoryDataService::new();
    service.replace_all(ROOM, vec![message("1", "a@x.com", "hi")]);

    let (_owner, chat) = mount(&service);
    assert_eq!(service.observer_count(ROOM), 1);
    assert_eq!(mirrored(chat), vec![message("1", "a@x.com", "hi")]);
    assert!(chat.with_untracked(|c| c.synced));
}

#[test]
fn each_notification_replaces_mirrored_list() {
    let service = MemoryDataService::new();
    let (_owner, chat) = mount(&service);

    service.replace_all(ROOM, vec![message("1", "a@x.com", "one"), message("2", "b@x.com", "two")]);
    service.replace_all(ROOM, vec![message("3", "c@x.com", "three")]);
    assert_eq!(mirrored(chat), vec![message("3", "c@x.com", "three")]);
}

#[test]
fn feed_error_leaves_mirrored_list_unchanged() {
    let service = MemoryDataService::new();
    let (_owner, chat) = mount(&service);
    service.replace_all(ROOM, vec![message("1", "a@x.com", "kept")]);

    service.emit_error(ROOM, "stream reset");
    assert_eq!(mirrored(chat), vec![message("1", "a@x.com", "kept")]);
}

// =============================================================
// Unmounted
// =============================================================

#[test]
fn cleanup_releases_subscription() {
    let service = MemoryDataService::new();
    let (owner, _chat) = mount(&service);

    owner.cleanup();
    assert_eq!(service.observer_count(ROOM), 0);
}

#[test]
fn no_mirroring_after_cleanup() {
    let service = MemoryDataService::new();
    let (owner, chat) = mount(&service);
    service.replace_all(ROOM, vec![message("1", "a@x.com", "before")]);

    owner.cleanup();
    service.replace_all(ROOM, vec![message("2", "b@x.com", "after")]);
    service.emit_error(ROOM, "late");

    assert!(chat.try_with_untracked(|c| c.messages.clone()).is_none());
}

#[test]
fn late_send_result_is_dropped_after_cleanup() {
    let service = MemoryDataService::new();
    service.fail_next_create("offline");
    let (owner, chat) = mount(&service);

    let draft = NewMessage { content: "hi".to_owned(), email: "a@x.com".to_owned(), user_name: "a".to_owned() };
    let request = service.create(ROOM, draft);
    owner.cleanup();

    let result = block_on(request);
    assert_eq!(result.as_ref().err(), Some(&ServiceError::Create("offline".to_owned())));
    assert!(chat.try_update(|c| c.settle_send("k1", result.map(|_| ()))).is_none());
}

#[test]
fn remount_starts_from_fresh_state() {
    let service = MemoryDataService::new();
    let (first, chat) = mount(&service);
    chat.update(|c| c.send_error = Some("create failed: offline".to_owned()));
    first.cleanup();

    let (_second, reopened) = mount(&service);
    assert!(reopened.with_untracked(|c| c.send_error.is_none() && c.pending.is_empty()));
    assert_eq!(service.observer_count(ROOM), 1);
}
