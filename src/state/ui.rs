//! Session-level UI state tracked by the controller between events.
//!
//! DESIGN
//! ======
//! The DOM stays the rendering surface; this struct mirrors the handful of
//! values the controller decides on so they can be asserted in tests and
//! reconciled with the page on startup.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::booking::ModalState;
use super::nav::SpyReason;
use super::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub modal: ModalState,
    pub mobile_menu_open: bool,
    pub active_section: Option<ActiveSection>,
    pub back_to_top_visible: bool,
    /// Number of scroll-spy evaluations run this session.
    pub spy_evaluations: u64,
}

/// Section currently highlighted in the navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSection {
    pub id: String,
    /// `None` when set by an anchor click rather than the scroll scan.
    pub reason: Option<SpyReason>,
}

impl UiState {
    pub fn active_section_id(&self) -> Option<&str> {
        self.active_section.as_ref().map(|a| a.id.as_str())
    }
}
