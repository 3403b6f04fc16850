use super::*;

// =============================================================
// Message serde
// =============================================================

#[test]
fn message_deserializes_camel_case_record() {
    let msg: Message = serde_json::from_value(serde_json::json!({
        "id": "m-1",
        "content": "hello",
        "email": "a@x.com",
        "userName": "alice",
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-01T10:00:00.000Z"
    }))
    .unwrap();
    assert_eq!(msg.id, "m-1");
    assert_eq!(msg.user_name, "alice");
    assert_eq!(msg.created_at.as_deref(), Some("2024-05-01T10:00:00.000Z"));
}

#[test]
fn message_tolerates_missing_sender_fields() {
    let msg: Message = serde_json::from_value(serde_json::json!({
        "id": "m-2",
        "content": "anonymous"
    }))
    .unwrap();
    assert_eq!(msg.email, "");
    assert_eq!(msg.user_name, "");
    assert!(msg.created_at.is_none());
}

#[test]
fn message_omits_absent_metadata_when_serialized() {
    let msg = Message {
        id: "m-3".to_owned(),
        content: "hi".to_owned(),
        email: "a@x.com".to_owned(),
        user_name: "a".to_owned(),
        created_at: None,
        updated_at: None,
    };
    let value = serde_json::to_value(&msg).unwrap();
    assert!(value.get("createdAt").is_none());
    assert_eq!(value["userName"], "a");
}

// =============================================================
// NewMessage / QueryNotification / Session
// =============================================================

#[test]
fn new_message_serializes_create_payload_shape() {
    let draft = NewMessage {
        content: "hi".to_owned(),
        email: "a@x.com".to_owned(),
        user_name: "a".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({"content": "hi", "email": "a@x.com", "userName": "a"})
    );
}

#[test]
fn query_notification_defaults_is_synced_to_false() {
    let n: QueryNotification = serde_json::from_value(serde_json::json!({"items": []})).unwrap();
    assert!(n.items.is_empty());
    assert!(!n.is_synced);
}

#[test]
fn session_default_has_no_identity() {
    let session = Session::default();
    assert!(session.login_id.is_none());
    assert!(session.username.is_none());
}
