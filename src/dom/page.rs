//! `Page` over the live document.
//!
//! Element handles are looked up once when the session attaches; the
//! server-rendered structure does not change afterwards.

use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlOptionElement, HtmlSelectElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions, Window,
};

use super::*;
use crate::controller::page::Page;
use crate::state::booking::BookingField;
use crate::state::nav::{ScrollMetrics, SectionBox, nav_href};
use crate::state::theme::{SwitchIcon, ThemeSwitch};

const DARK_CLASS: &str = "dark";
const HIDDEN_CLASS: &str = "hidden";
const ACTIVE_CLASS: &str = "active";
const INPUT_ERROR_CLASS: &str = "input-error";
const ACTIVE_NAV_CLASS: &str = "active-nav-link";
const CAR_HIDDEN_CLASS: &str = "car-card-hidden";

pub struct DomPage {
    window: Window,
    document: Document,
    root: Option<Element>,
    body: Option<HtmlElement>,
    switch_desktop: Option<Element>,
    switch_mobile: Option<Element>,
    mobile_menu: Option<Element>,
    menu_button: Option<Element>,
    booking_modal: Option<Element>,
    confirmation: Option<Element>,
    car_type_select: Option<HtmlSelectElement>,
    booking_form: Option<HtmlFormElement>,
    back_to_top: Option<HtmlElement>,
    car_cards: Option<Vec<Element>>,
    view_all: Option<HtmlElement>,
    year_stamp: Option<Element>,
    sections: Vec<HtmlElement>,
    desktop_links: Vec<Element>,
    mobile_links: Vec<Element>,
}

impl DomPage {
    pub fn attach(window: Window, document: Document) -> Self {
        let car_cards = document
            .get_element_by_id(CAR_GRID)
            .map(|_| query_all::<Element>(&document, CAR_CARD_SELECTOR));
        Self {
            root: document.document_element(),
            body: document.body(),
            switch_desktop: by_id(&document, THEME_SWITCH_DESKTOP),
            switch_mobile: by_id(&document, THEME_SWITCH_MOBILE),
            mobile_menu: by_id(&document, MOBILE_MENU),
            menu_button: by_id(&document, MOBILE_MENU_BUTTON),
            booking_modal: by_id(&document, BOOKING_MODAL),
            confirmation: by_id(&document, CONFIRMATION),
            car_type_select: by_id(&document, CAR_TYPE_SELECT),
            booking_form: by_id(&document, BOOKING_FORM),
            back_to_top: by_id(&document, BACK_TO_TOP),
            car_cards,
            view_all: by_id(&document, VIEW_ALL_CARS),
            year_stamp: by_id(&document, YEAR_STAMP),
            sections: query_all(&document, SECTION_SELECTOR),
            desktop_links: query_all(&document, DESKTOP_NAV_SELECTOR),
            mobile_links: query_all(&document, MOBILE_NAV_SELECTOR),
            window,
            document,
        }
    }

    pub fn booking_modal(&self) -> Option<&Element> {
        self.booking_modal.as_ref()
    }

    pub fn booking_form(&self) -> Option<&HtmlFormElement> {
        self.booking_form.as_ref()
    }

    fn switch(&self, switch: ThemeSwitch) -> Option<&Element> {
        match switch {
            ThemeSwitch::Desktop => self.switch_desktop.as_ref(),
            ThemeSwitch::Mobile => self.switch_mobile.as_ref(),
        }
    }
}

fn set_display(el: &HtmlElement, value: &str) {
    report(el.style().set_property("display", value), "display update");
}

fn px(value: i32) -> f64 {
    f64::from(value)
}

impl Page for DomPage {
    fn is_dark(&self) -> bool {
        self.root.as_ref().is_some_and(|root| root.class_list().contains(DARK_CLASS))
    }

    fn set_dark(&mut self, dark: bool) {
        if let Some(root) = &self.root {
            set_class(root, DARK_CLASS, dark);
        }
    }

    fn set_switch_icon(&mut self, switch: ThemeSwitch, icon: SwitchIcon) {
        if let Some(el) = self.switch(switch) {
            el.set_inner_html(icon.markup());
        }
    }

    fn prefers_dark(&self) -> bool {
        matches!(
            self.window.match_media("(prefers-color-scheme: dark)"),
            Ok(Some(query)) if query.matches()
        )
    }

    fn has_mobile_menu(&self) -> bool {
        self.mobile_menu.is_some() && self.menu_button.is_some()
    }

    fn mobile_menu_open(&self) -> bool {
        self.mobile_menu
            .as_ref()
            .is_some_and(|menu| !menu.class_list().contains(HIDDEN_CLASS))
    }

    fn set_mobile_menu_open(&mut self, open: bool) {
        if let Some(menu) = &self.mobile_menu {
            set_class(menu, HIDDEN_CLASS, !open);
        }
    }

    fn has_booking_modal(&self) -> bool {
        self.booking_modal.is_some()
    }

    fn set_modal_active(&mut self, active: bool) {
        if let Some(modal) = &self.booking_modal {
            set_class(modal, ACTIVE_CLASS, active);
        }
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        if let Some(body) = &self.body {
            let value = if locked { "hidden" } else { "" };
            report(body.style().set_property("overflow", value), "body overflow update");
        }
    }

    fn hide_confirmation(&mut self) {
        if let Some(el) = &self.confirmation {
            set_class(el, HIDDEN_CLASS, true);
        }
    }

    fn car_type_options(&self) -> Vec<String> {
        let Some(select) = &self.car_type_select else {
            return Vec::new();
        };
        let options = select.options();
        (0..options.length())
            .filter_map(|i| options.item(i))
            .filter_map(|el| el.dyn_ref::<HtmlOptionElement>().map(HtmlOptionElement::text))
            .collect()
    }

    fn select_car_type(&mut self, index: usize) {
        if let (Some(select), Ok(index)) = (&self.car_type_select, i32::try_from(index)) {
            select.set_selected_index(index);
        }
    }

    fn set_field_error(&mut self, field: BookingField, message: Option<&str>) {
        if let Some(input) = self.document.get_element_by_id(field.id()) {
            set_class(&input, INPUT_ERROR_CLASS, message.is_some());
        }
        if let Some(slot) = self.document.get_element_by_id(&field.error_slot_id()) {
            slot.set_text_content(Some(message.unwrap_or_default()));
            set_class(&slot, HIDDEN_CLASS, message.is_none());
        }
    }

    fn reset_booking_form(&mut self) {
        if let Some(form) = &self.booking_form {
            form.reset();
        }
    }

    fn open_in_new_context(&mut self, url: &str) {
        match self.window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => log::warn!("new window was blocked for booking hand-off"),
            Err(e) => log::warn!("failed to open booking hand-off: {}", describe(&e)),
        }
    }

    fn element_exists(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn scroll_into_view(&mut self, id: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn set_active_nav(&mut self, section_id: &str) {
        let href = nav_href(section_id);
        for link in self.desktop_links.iter().chain(&self.mobile_links) {
            let matches = link.get_attribute("href").is_some_and(|h| h == href);
            set_class(link, ACTIVE_NAV_CLASS, matches);
        }
    }

    fn clear_nav_links(&mut self) {
        for link in query_all::<Element>(&self.document, NAV_LINK_SELECTOR) {
            set_class(&link, ACTIVE_NAV_CLASS, false);
        }
    }

    fn sections(&self) -> Vec<SectionBox> {
        self.sections
            .iter()
            .map(|s| SectionBox::new(s.id(), px(s.offset_top()), px(s.offset_height())))
            .collect()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let viewport_height = self
            .window
            .inner_height()
            .map_or(0.0, |v| v.as_f64().unwrap_or_default());
        ScrollMetrics {
            page_offset: self.window.scroll_y().unwrap_or_default(),
            viewport_height,
            body_height: self.body.as_ref().map_or(0.0, |b| px(b.offset_height())),
            body_scroll_top: self.body.as_ref().map_or(0.0, |b| px(b.scroll_top())),
            root_scroll_top: self.root.as_ref().map_or(0.0, |r| px(r.scroll_top())),
        }
    }

    fn set_back_to_top_visible(&mut self, visible: bool) {
        if let Some(button) = &self.back_to_top {
            set_display(button, if visible { "flex" } else { "none" });
        }
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn car_card_count(&self) -> Option<usize> {
        self.car_cards.as_ref().map(Vec::len)
    }

    fn set_car_card_visible(&mut self, index: usize, visible: bool) {
        if let Some(card) = self.car_cards.as_ref().and_then(|cards| cards.get(index)) {
            set_class(card, CAR_HIDDEN_CLASS, !visible);
        }
    }

    fn set_view_all_visible(&mut self, visible: bool) {
        if let Some(link) = &self.view_all {
            set_display(link, if visible { "inline-block" } else { "none" });
        }
    }

    fn current_year(&self) -> i32 {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }

    fn set_year_stamp(&mut self, year: i32) {
        if let Some(el) = &self.year_stamp {
            el.set_text_content(Some(&year.to_string()));
        }
    }
}
