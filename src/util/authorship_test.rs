use super::*;

fn message(id: &str, email: &str) -> Message {
    Message {
        id: id.to_owned(),
        content: "hello".to_owned(),
        email: email.to_owned(),
        user_name: "someone".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

fn session(login_id: Option<&str>) -> Session {
    Session { login_id: login_id.map(ToOwned::to_owned), username: Some("a".to_owned()) }
}

#[test]
fn matching_email_is_right_aligned() {
    let s = session(Some("a@x.com"));
    assert_eq!(alignment_for(&message("1", "a@x.com"), Some(&s)), Alignment::Right);
}

#[test]
fn other_email_is_left_aligned() {
    let s = session(Some("a@x.com"));
    assert_eq!(alignment_for(&message("1", "b@x.com"), Some(&s)), Alignment::Left);
}

#[test]
fn comparison_is_exact() {
    let s = session(Some("a@x.com"));
    assert!(!is_own_message(&message("1", "A@x.com"), Some(&s)));
    assert!(!is_own_message(&message("1", " a@x.com"), Some(&s)));
}

#[test]
fn missing_session_or_login_owns_nothing() {
    assert!(!is_own_message(&message("1", "a@x.com"), None));
    let anonymous = session(None);
    assert!(!is_own_message(&message("1", ""), Some(&anonymous)));
}

#[test]
fn classification_is_independent_per_message_and_order() {
    let s = session(Some("a@x.com"));
    let forward = [message("1", "b@x.com"), message("2", "a@x.com")];
    let reversed = [message("2", "a@x.com"), message("1", "b@x.com")];

    let sides: Vec<_> = forward.iter().map(|m| alignment_for(m, Some(&s))).collect();
    assert_eq!(sides, vec![Alignment::Left, Alignment::Right]);

    let sides: Vec<_> = reversed.iter().map(|m| alignment_for(m, Some(&s))).collect();
    assert_eq!(sides, vec![Alignment::Right, Alignment::Left]);
}
