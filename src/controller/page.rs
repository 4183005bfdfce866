//! The page surface the controller reads from and writes to.
//!
//! Implemented over `web-sys` in `dom::page` and by an in-memory fake in
//! tests. Every optional element is the implementation's concern: writes to
//! a missing element are no-ops, reads report "not present".

use crate::state::booking::BookingField;
use crate::state::nav::{ScrollMetrics, SectionBox};
use crate::state::theme::{SwitchIcon, ThemeSwitch};

pub trait Page {
    // -- theme --------------------------------------------------------
    fn is_dark(&self) -> bool;
    fn set_dark(&mut self, dark: bool);
    fn set_switch_icon(&mut self, switch: ThemeSwitch, icon: SwitchIcon);
    fn prefers_dark(&self) -> bool;

    // -- mobile menu ----------------------------------------------------
    /// Both the menu panel and its toggle button are present.
    fn has_mobile_menu(&self) -> bool;
    /// The menu panel is present and shown. Does not require the button.
    fn mobile_menu_open(&self) -> bool;
    fn set_mobile_menu_open(&mut self, open: bool);

    // -- booking modal ----------------------------------------------------
    fn has_booking_modal(&self) -> bool;
    fn set_modal_active(&mut self, active: bool);
    fn set_page_scroll_locked(&mut self, locked: bool);
    fn hide_confirmation(&mut self);
    /// Visible text of every car-type option, in order.
    fn car_type_options(&self) -> Vec<String>;
    fn select_car_type(&mut self, index: usize);
    /// Show `message` on the field (error mark + inline slot), or clear both.
    fn set_field_error(&mut self, field: BookingField, message: Option<&str>);
    fn reset_booking_form(&mut self);
    fn open_in_new_context(&mut self, url: &str);

    // -- navigation -------------------------------------------------------
    fn element_exists(&self, id: &str) -> bool;
    fn scroll_into_view(&mut self, id: &str);
    /// Clear every active nav link, then mark the desktop and mobile links
    /// pointing at `section_id`.
    fn set_active_nav(&mut self, section_id: &str);
    /// Remove the active mark from every `.nav-link` in the document,
    /// including links outside the desktop and mobile sets.
    fn clear_nav_links(&mut self);
    fn sections(&self) -> Vec<SectionBox>;
    fn scroll_metrics(&self) -> ScrollMetrics;
    fn set_back_to_top_visible(&mut self, visible: bool);
    fn scroll_to_top(&mut self);

    // -- homepage cars ------------------------------------------------------
    fn pathname(&self) -> String;
    /// Number of cards in the car grid, or `None` when there is no grid.
    fn car_card_count(&self) -> Option<usize>;
    fn set_car_card_visible(&mut self, index: usize, visible: bool);
    fn set_view_all_visible(&mut self, visible: bool);

    // -- footer ---------------------------------------------------------------
    fn current_year(&self) -> i32;
    fn set_year_stamp(&mut self, year: i32);
}
