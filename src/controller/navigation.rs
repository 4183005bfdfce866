//! Navigation controller: mobile menu, in-page anchors, scroll-spy, and
//! back-to-top.

use super::App;
use super::events::Outcome;
use super::page::Page;
use crate::state::nav::{SpyDecision, active_section, back_to_top_visible, fragment_target};
use crate::state::ui::ActiveSection;
use crate::util::debounce::Scheduler;
use crate::util::storage::PreferenceStore;

impl<P: Page, S: PreferenceStore, T: Scheduler> App<P, S, T> {
    pub fn toggle_mobile_menu(&mut self) {
        if !self.page.has_mobile_menu() {
            return;
        }
        let open = !self.page.mobile_menu_open();
        self.page.set_mobile_menu_open(open);
        self.ui.mobile_menu_open = open;
    }

    /// Smooth-scroll to an in-page fragment target.
    ///
    /// Returns `Outcome::Default` when `href` does not name an element on
    /// this page, leaving the browser to navigate (e.g. `/#armada` from
    /// another page).
    pub fn follow_anchor(&mut self, href: &str) -> Outcome {
        let Some(id) = fragment_target(href) else {
            return Outcome::Default;
        };
        if !self.page.element_exists(id) {
            return Outcome::Default;
        }

        self.page.scroll_into_view(id);
        if self.page.mobile_menu_open() {
            self.page.set_mobile_menu_open(false);
            self.ui.mobile_menu_open = false;
        }
        self.page.clear_nav_links();
        self.page.set_active_nav(id);
        self.ui.active_section = Some(ActiveSection { id: id.to_owned(), reason: None });
        Outcome::PreventDefault
    }

    /// Restart the debounce window; the evaluation runs on the trailing edge.
    pub fn schedule_scroll_evaluation(&mut self) {
        self.scroll.trigger();
    }

    pub fn on_scroll_timer(&mut self) {
        if self.scroll.fire() {
            self.evaluate_scroll();
        }
    }

    /// Recompute the active section and back-to-top visibility from the
    /// current scroll position, and apply both to the page.
    pub fn evaluate_scroll(&mut self) -> SpyDecision {
        let metrics = self.page.scroll_metrics();
        let sections = self.page.sections();
        let decision = active_section(&sections, &metrics, &self.rules);

        self.page.set_active_nav(&decision.section_id);
        let show_back_to_top = back_to_top_visible(&metrics, self.config.back_to_top_threshold_px);
        self.page.set_back_to_top_visible(show_back_to_top);

        self.ui.active_section = Some(ActiveSection {
            id: decision.section_id.clone(),
            reason: Some(decision.reason),
        });
        self.ui.back_to_top_visible = show_back_to_top;
        self.ui.spy_evaluations += 1;
        decision
    }

    pub fn back_to_top(&mut self) {
        self.page.scroll_to_top();
    }
}
