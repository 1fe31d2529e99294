//! Tests for `prompt::relay_messages` and role wire values.
//!
//! External interactions: none (pure function tests).

use prompt::{relay_messages, ChatMessage, MessageRole, DEFAULT_SYSTEM_MESSAGE};

/// **Test: With a system instruction the request is exactly [system, user].**
#[test]
fn relay_messages_system_then_user() {
    let messages = relay_messages(Some(DEFAULT_SYSTEM_MESSAGE), "hi");
    assert_eq!(
        messages,
        vec![ChatMessage::system(DEFAULT_SYSTEM_MESSAGE), ChatMessage::user("hi")]
    );
}

/// **Test: Without a system instruction the request is a single user turn.**
#[test]
fn relay_messages_user_only() {
    let messages = relay_messages(None, "hello");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, "hello");
}

/// **Test: A blank system instruction is dropped rather than sent empty.**
#[test]
fn relay_messages_blank_system_dropped() {
    let messages = relay_messages(Some("   "), "hello");
    assert_eq!(messages, vec![ChatMessage::user("hello")]);
}

/// **Test: User text is passed through verbatim (no trimming, no prefix).**
#[test]
fn relay_messages_keeps_user_text_verbatim() {
    let text = "  line one\nline two  ";
    let messages = relay_messages(None, text);
    assert_eq!(messages[0].content, text);
}

#[test]
fn role_wire_values() {
    assert_eq!(MessageRole::System.as_str(), "system");
    assert_eq!(MessageRole::User.as_str(), "user");
    assert_eq!(MessageRole::Assistant.as_str(), "assistant");
}
