use super::*;

#[test]
fn ui_state_default_is_light_and_closed() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.modal, ModalState::Closed);
    assert!(!state.mobile_menu_open);
    assert!(!state.back_to_top_visible);
    assert_eq!(state.spy_evaluations, 0);
}

#[test]
fn active_section_id_reads_through() {
    let mut state = UiState::default();
    assert_eq!(state.active_section_id(), None);
    state.active_section = Some(ActiveSection { id: "armada".into(), reason: None });
    assert_eq!(state.active_section_id(), Some("armada"));
}
