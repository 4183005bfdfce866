//! Theme controller: apply, toggle, and persist the light/dark mode.

use super::App;
use super::page::Page;
use crate::state::theme::{Theme, ThemeSwitch, resolve_startup};
use crate::util::debounce::Scheduler;
use crate::util::storage::PreferenceStore;

impl<P: Page, S: PreferenceStore, T: Scheduler> App<P, S, T> {
    /// Set the document flag and point both switches at the other theme.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.page.set_dark(theme.is_dark());
        for switch in ThemeSwitch::ALL {
            self.page.set_switch_icon(switch, theme.switch_icon());
        }
        self.ui.theme = theme;
    }

    /// Flip the theme currently shown by the document and persist it.
    ///
    /// A store failure is logged and otherwise ignored; the new theme stays
    /// applied for the session.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = Theme::from_dark_flag(self.page.is_dark()).opposite();
        self.apply_theme(next);
        if let Err(e) = self.store.save(&self.config.theme_storage_key, next.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        next
    }

    /// Stored preference, then system preference, then light.
    pub fn startup_theme(&self) -> Theme {
        let stored = match self.store.load(&self.config.theme_storage_key) {
            Ok(stored) => stored,
            Err(e) => {
                log::debug!("theme preference not readable: {e}");
                None
            }
        };
        resolve_startup(stored.as_deref(), self.page.prefers_dark())
    }
}
