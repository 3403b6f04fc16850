use super::*;

#[test]
fn default_config_observes_message_collection() {
    let config = ChatConfig::default();
    assert_eq!(config.collection, "Message");
    assert_eq!(config.unknown_user_name, "Unknown User");
    assert_eq!(config.palette[0], "#8e44ad");
    assert!(!config.optimistic_send);
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = ChatConfig::from_json(r#"{"optimisticSend": true}"#).unwrap();
    assert!(config.optimistic_send);
    assert_eq!(config.collection, DEFAULT_COLLECTION);
    assert_eq!(config.palette.len(), DEFAULT_PALETTE.len());
}

#[test]
fn from_json_accepts_single_color_palette() {
    let config = ChatConfig::from_json(r##"{"collection": "Todo", "palette": ["#8e44ad"]}"##).unwrap();
    assert_eq!(config.collection, "Todo");
    assert_eq!(config.palette, vec!["#8e44ad".to_owned()]);
}

#[test]
fn from_json_rejects_empty_palette() {
    let err = ChatConfig::from_json(r#"{"palette": []}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPalette));
}

#[test]
fn from_json_rejects_blank_collection() {
    let err = ChatConfig::from_json(r#"{"collection": "  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyCollection));
}

#[test]
fn from_json_reports_malformed_input() {
    let err = ChatConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_document_without_browser_uses_defaults() {
    assert_eq!(ChatConfig::from_document(), ChatConfig::default());
}
