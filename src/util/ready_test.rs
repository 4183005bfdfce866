use super::*;

#[test]
fn loading_defers_startup() {
    assert_eq!(ReadyState::parse("loading"), ReadyState::Loading);
    assert!(ReadyState::parse("loading").defers_startup());
}

#[test]
fn parsed_documents_start_immediately() {
    assert_eq!(ReadyState::parse("interactive"), ReadyState::Interactive);
    assert_eq!(ReadyState::parse("complete"), ReadyState::Complete);
    assert!(!ReadyState::parse("interactive").defers_startup());
    assert!(!ReadyState::parse("complete").defers_startup());
}

#[test]
fn unknown_state_does_not_defer() {
    assert_eq!(ReadyState::parse(""), ReadyState::Complete);
    assert!(!ReadyState::parse("Loading").defers_startup());
}
