use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_starts_with_onboarding_turn() {
    let state = ChatState::default();
    assert_eq!(state.turns(), &[ChatTurn::assistant(ONBOARDING_MESSAGE, Vec::new())]);
    assert!(!state.is_pending());
}

#[test]
fn onboarding_message_lists_example_prompts() {
    assert!(ONBOARDING_MESSAGE.starts_with("Hi! I'm your AI shopping assistant."));
    assert!(ONBOARDING_MESSAGE.contains("• \"I'm losing hair, what can help?\""));
    assert!(ONBOARDING_MESSAGE.ends_with("• \"I want something for better sleep\""));
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn begin_submit_appends_trimmed_user_turn() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_submit("  I'm losing hair \n").as_deref(), Some("I'm losing hair"));
    assert_eq!(state.turns().len(), 2);
    assert_eq!(state.turns()[1], ChatTurn::user("I'm losing hair"));
    assert!(state.is_pending());
}

#[test]
fn begin_submit_rejects_blank_text() {
    let mut state = ChatState::default();
    assert!(state.begin_submit("   \t").is_none());
    assert!(state.begin_submit("").is_none());
    assert_eq!(state.turns().len(), 1);
    assert!(!state.is_pending());
}

#[test]
fn begin_submit_rejects_while_pending() {
    let mut state = ChatState::default();
    state.begin_submit("first");
    assert!(!state.can_submit("second"));
    assert!(state.begin_submit("second").is_none());
    assert_eq!(state.turns().len(), 2);
}

// =============================================================
// finish_submit
// =============================================================

#[test]
fn finish_submit_appends_reply_with_recommendations() {
    let mut state = ChatState::default();
    state.begin_submit("dandruff");
    let reply = ChatReply {
        message: Some("Try X".to_owned()),
        recommendations: vec![ProductRef::new("7", "Shampoo X")],
    };
    assert!(state.finish_submit(Ok(reply)));

    let last = state.turns().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "Try X");
    assert_eq!(last.recommendations, vec![ProductRef::new("7", "Shampoo X")]);
    assert!(!state.is_pending());
}

#[test]
fn finish_submit_substitutes_missing_or_empty_message() {
    let mut state = ChatState::default();
    state.begin_submit("hello");
    state.finish_submit(Ok(ChatReply::default()));
    assert_eq!(state.turns()[2].content, EMPTY_REPLY_MESSAGE);

    state.begin_submit("again");
    state.finish_submit(Ok(ChatReply { message: Some(String::new()), recommendations: Vec::new() }));
    assert_eq!(state.turns()[4].content, EMPTY_REPLY_MESSAGE);
}

#[test]
fn finish_submit_failure_appends_fallback_and_unlocks_input() {
    let mut state = ChatState::default();
    state.begin_submit("hello");
    state.finish_submit(Err(NetworkError::Timeout));

    assert_eq!(state.turns()[2], ChatTurn::assistant(FAILED_REPLY_MESSAGE, Vec::new()));
    assert!(!state.is_pending());
    assert!(state.can_submit("next"));
}

#[test]
fn finish_submit_without_pending_is_ignored() {
    let mut state = ChatState::default();
    assert!(!state.finish_submit(Err(NetworkError::Timeout)));
    assert_eq!(state.turns().len(), 1);
}

#[test]
fn roles_alternate_after_several_exchanges() {
    let mut state = ChatState::default();
    for text in ["one", "two", "three"] {
        state.begin_submit(text);
        state.finish_submit(Ok(ChatReply { message: Some(format!("re: {text}")), recommendations: Vec::new() }));
    }
    let roles: Vec<Role> = state.turns().iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![Role::Assistant, Role::User, Role::Assistant, Role::User, Role::Assistant, Role::User, Role::Assistant]
    );
}
