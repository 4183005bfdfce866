//! Homepage car filter and footer year stamp.

use super::App;
use super::page::Page;
use crate::state::cars::{CarVisibility, is_homepage};
use crate::util::debounce::Scheduler;
use crate::util::storage::PreferenceStore;

impl<P: Page, S: PreferenceStore, T: Scheduler> App<P, S, T> {
    /// Cap the visible car cards on the homepage. Returns the applied plan,
    /// or `None` off the homepage or without a car grid.
    pub fn apply_car_visibility(&mut self) -> Option<CarVisibility> {
        if !is_homepage(&self.page.pathname()) {
            return None;
        }
        let count = self.page.car_card_count()?;
        let plan = CarVisibility::plan(count, self.config.initially_visible_cars);
        for (index, visible) in plan.visible.iter().enumerate() {
            self.page.set_car_card_visible(index, *visible);
        }
        self.page.set_view_all_visible(plan.show_view_all);
        Some(plan)
    }

    pub fn stamp_year(&mut self) {
        let year = self.page.current_year();
        self.page.set_year_stamp(year);
    }
}
