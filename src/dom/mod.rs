//! Browser bindings for the page session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. `page` implements the
//! controller's `Page` over `web-sys`, `storage` backs preferences with
//! `localStorage`, `timer` drives the scroll debounce with `gloo-timers`,
//! and `session` wires DOM listeners into `App::dispatch`.

pub mod page;
pub mod session;
pub mod storage;
pub mod timer;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

pub(crate) const THEME_SWITCH_DESKTOP: &str = "theme-switcher-desktop";
pub(crate) const THEME_SWITCH_MOBILE: &str = "theme-switcher-mobile-btn";
pub(crate) const MOBILE_MENU_BUTTON: &str = "mobile-menu-button";
pub(crate) const MOBILE_MENU: &str = "mobile-menu";
pub(crate) const BOOKING_MODAL: &str = "booking-modal";
pub(crate) const CLOSE_BOOKING: &str = "close-booking-modal";
pub(crate) const HERO_BOOKING: &str = "open-booking-modal-hero";
pub(crate) const CARD_BOOKING_SELECTOR: &str = ".open-booking-modal-card";
pub(crate) const CAR_TYPE_SELECT: &str = "car-type";
pub(crate) const BOOKING_FORM: &str = "booking-form";
pub(crate) const CONFIRMATION: &str = "booking-confirmation-message";
pub(crate) const CAR_GRID: &str = "car-grid";
pub(crate) const CAR_CARD_SELECTOR: &str = "#car-grid > .car-card-new";
pub(crate) const VIEW_ALL_CARS: &str = "view-all-cars-btn";
pub(crate) const BACK_TO_TOP: &str = "back-to-top-btn";
pub(crate) const YEAR_STAMP: &str = "currentYear";
pub(crate) const SITE_CONFIG: &str = "site-config";
pub(crate) const SECTION_SELECTOR: &str = "section[id], header[id]";
pub(crate) const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub(crate) const NAV_LINK_SELECTOR: &str = ".nav-link";
pub(crate) const DESKTOP_NAV_SELECTOR: &str = "nav .hidden.md\\:flex a.nav-link";
pub(crate) const MOBILE_NAV_SELECTOR: &str = "#mobile-menu a.nav-link";

/// Element by id, cast to `T`. Missing or mistyped elements are `None`.
pub(crate) fn by_id<T: JsCast + Clone>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<T>().cloned())
}

/// Every element matching `selector`, cast to `T`, in document order.
pub(crate) fn query_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::debug!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect()
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    report(result, "class update");
}

/// Log a failed DOM call at debug level; the page keeps working.
pub(crate) fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(e) = result {
        log::debug!("{what} failed: {}", describe(&e));
    }
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
