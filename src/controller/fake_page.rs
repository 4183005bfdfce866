//! In-memory `Page` used by controller tests.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::page::Page;
use crate::state::booking::BookingField;
use crate::state::nav::{ScrollMetrics, SectionBox, nav_href};
use crate::state::theme::{SwitchIcon, ThemeSwitch};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct FakePage {
    pub dark: bool,
    pub prefers_dark: bool,
    pub icons: HashMap<ThemeSwitch, SwitchIcon>,

    pub has_menu: bool,
    pub has_menu_button: bool,
    pub menu_open: bool,

    pub has_modal: bool,
    pub modal_active: bool,
    pub scroll_locked: bool,
    pub confirmation_visible: bool,
    pub options: Vec<String>,
    pub selected_option: Option<usize>,
    pub field_errors: BTreeMap<BookingField, String>,
    pub form_resets: u32,
    pub opened: Vec<String>,

    pub ids: HashSet<String>,
    pub scrolled_into_view: Vec<String>,
    pub desktop_links: Vec<NavLink>,
    pub mobile_links: Vec<NavLink>,
    /// `.nav-link` anchors outside both nav sets (e.g. the footer).
    pub other_links: Vec<NavLink>,
    pub nav_updates: u32,
    pub sections: Vec<SectionBox>,
    pub metrics: ScrollMetrics,
    pub back_to_top_visible: Option<bool>,
    pub scrolled_to_top: u32,

    pub path: String,
    pub cards: Option<Vec<bool>>,
    pub view_all_visible: Option<bool>,

    pub year: i32,
    pub year_stamp: Option<i32>,
}

fn links(ids: &[&str]) -> Vec<NavLink> {
    ids.iter().map(|id| NavLink { href: nav_href(id), active: false }).collect()
}

impl FakePage {
    /// A homepage with five cars, four sections and both nav sets.
    pub fn homepage() -> Self {
        let section_ids = ["home", "armada", "tentang", "hubungi-kami"];
        Self {
            dark: false,
            prefers_dark: false,
            icons: HashMap::new(),
            has_menu: true,
            has_menu_button: true,
            menu_open: false,
            has_modal: true,
            modal_active: false,
            scroll_locked: false,
            confirmation_visible: true,
            options: vec![
                "-- Pilih Mobil --".into(),
                "Avanza".into(),
                "Xenia".into(),
                "Innova Reborn".into(),
            ],
            selected_option: Some(0),
            field_errors: BTreeMap::new(),
            form_resets: 0,
            opened: Vec::new(),
            ids: section_ids.iter().map(|s| (*s).to_owned()).collect(),
            scrolled_into_view: Vec::new(),
            desktop_links: links(&section_ids),
            mobile_links: links(&section_ids),
            other_links: links(&["armada", "hubungi-kami"]),
            nav_updates: 0,
            sections: vec![
                SectionBox::new("home", 0.0, 800.0),
                SectionBox::new("armada", 800.0, 800.0),
                SectionBox::new("tentang", 1600.0, 800.0),
                SectionBox::new("hubungi-kami", 2400.0, 600.0),
            ],
            metrics: ScrollMetrics {
                page_offset: 0.0,
                viewport_height: 1000.0,
                body_height: 3400.0,
                body_scroll_top: 0.0,
                root_scroll_top: 0.0,
            },
            back_to_top_visible: None,
            scrolled_to_top: 0,
            path: "/".into(),
            cards: Some(vec![false; 5]),
            view_all_visible: None,
            year: 2026,
            year_stamp: None,
        }
    }

    /// A page with none of the optional hooks.
    pub fn bare() -> Self {
        Self {
            has_menu: false,
            has_menu_button: false,
            has_modal: false,
            options: Vec::new(),
            selected_option: None,
            ids: HashSet::new(),
            desktop_links: Vec::new(),
            mobile_links: Vec::new(),
            other_links: Vec::new(),
            sections: Vec::new(),
            path: "/gallery".into(),
            cards: None,
            ..Self::homepage()
        }
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.metrics.page_offset = offset;
        self.metrics.root_scroll_top = offset;
    }

    pub fn active_desktop(&self) -> Vec<&str> {
        active(&self.desktop_links)
    }

    pub fn active_mobile(&self) -> Vec<&str> {
        active(&self.mobile_links)
    }
}

fn active(links: &[NavLink]) -> Vec<&str> {
    links.iter().filter(|l| l.active).map(|l| l.href.as_str()).collect()
}

impl Page for FakePage {
    fn is_dark(&self) -> bool {
        self.dark
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_switch_icon(&mut self, switch: ThemeSwitch, icon: SwitchIcon) {
        self.icons.insert(switch, icon);
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn has_mobile_menu(&self) -> bool {
        self.has_menu && self.has_menu_button
    }

    fn mobile_menu_open(&self) -> bool {
        self.has_menu && self.menu_open
    }

    fn set_mobile_menu_open(&mut self, open: bool) {
        if self.has_menu {
            self.menu_open = open;
        }
    }

    fn has_booking_modal(&self) -> bool {
        self.has_modal
    }

    fn set_modal_active(&mut self, active: bool) {
        self.modal_active = active;
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn hide_confirmation(&mut self) {
        self.confirmation_visible = false;
    }

    fn car_type_options(&self) -> Vec<String> {
        self.options.clone()
    }

    fn select_car_type(&mut self, index: usize) {
        self.selected_option = Some(index);
    }

    fn set_field_error(&mut self, field: BookingField, message: Option<&str>) {
        match message {
            Some(message) => self.field_errors.insert(field, message.to_owned()),
            None => self.field_errors.remove(&field),
        };
    }

    fn reset_booking_form(&mut self) {
        self.form_resets += 1;
        self.selected_option = self.options.first().map(|_| 0);
    }

    fn open_in_new_context(&mut self, url: &str) {
        self.opened.push(url.to_owned());
    }

    fn element_exists(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.scrolled_into_view.push(id.to_owned());
    }

    fn set_active_nav(&mut self, section_id: &str) {
        let href = nav_href(section_id);
        for link in self.desktop_links.iter_mut().chain(self.mobile_links.iter_mut()) {
            link.active = link.href == href;
        }
        self.nav_updates += 1;
    }

    fn clear_nav_links(&mut self) {
        for link in self.desktop_links.iter_mut().chain(&mut self.mobile_links).chain(&mut self.other_links) {
            link.active = false;
        }
    }

    fn sections(&self) -> Vec<SectionBox> {
        self.sections.clone()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn set_back_to_top_visible(&mut self, visible: bool) {
        self.back_to_top_visible = Some(visible);
    }

    fn scroll_to_top(&mut self) {
        self.scrolled_to_top += 1;
    }

    fn pathname(&self) -> String {
        self.path.clone()
    }

    fn car_card_count(&self) -> Option<usize> {
        self.cards.as_ref().map(Vec::len)
    }

    fn set_car_card_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.cards.as_mut().and_then(|cards| cards.get_mut(index)) {
            *slot = visible;
        }
    }

    fn set_view_all_visible(&mut self, visible: bool) {
        self.view_all_visible = Some(visible);
    }

    fn current_year(&self) -> i32 {
        self.year
    }

    fn set_year_stamp(&mut self, year: i32) {
        self.year_stamp = Some(year);
    }
}
