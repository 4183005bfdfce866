//! Page session lifecycle: config, logging, listener wiring, teardown.
//!
//! DESIGN
//! ======
//! One `Session` exists per page load, parked in a thread-local. It owns
//! the controller and every attached listener; dropping it detaches the
//! listeners and cancels the pending scroll evaluation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, FormData, HtmlFormElement, Node, Window};

use super::page::DomPage;
use super::storage::LocalStore;
use super::timer::{BrowserApp, BrowserScheduler};
use super::*;
use crate::config::SiteConfig;
use crate::controller::App;
use crate::controller::events::{EventData, EventKind, Outcome, Role};
use crate::controller::page::Page;
use crate::state::booking::{BookingField, FormValues};
use crate::util::ready::ReadyState;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        report(
            self.target
                .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref()),
            "listener removal",
        );
    }
}

struct Session {
    app: Rc<RefCell<BrowserApp>>,
    listeners: Vec<Listener>,
}

impl Drop for Session {
    fn drop(&mut self) {
        self.listeners.clear();
        match self.app.try_borrow_mut() {
            Ok(mut app) => app.teardown(),
            Err(_) => log::debug!("session dropped while a handler was running"),
        }
    }
}

/// Start the session now, or on `DOMContentLoaded` while still parsing.
pub fn start_when_ready() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if ReadyState::parse(&document.ready_state()).defers_startup() {
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || start(window, ready_document));
        report(
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()),
            "DOMContentLoaded listener",
        );
    } else {
        start(window, document);
    }
}

/// Drop the running session, if any.
pub fn teardown() {
    let session = SESSION.with(|slot| slot.borrow_mut().take());
    if session.is_some() {
        log::info!("page session torn down");
    }
}

fn start(window: Window, document: Document) {
    init_logging();
    let config = load_config(&document);
    match config.log_level() {
        Ok(level) => log::set_max_level(level.to_level_filter()),
        Err(e) => log::warn!("{e}"),
    }

    let page = DomPage::attach(window.clone(), document.clone());
    let store = LocalStore::new(window.clone());
    let app = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserApp>>| {
        RefCell::new(App::new(config, page, store, BrowserScheduler::new(weak.clone())))
    });
    app.borrow_mut().init();

    let listeners = wire(&app, &window, &document);
    log::debug!("attached {} listeners", listeners.len());

    let previous = SESSION.with(|slot| slot.borrow_mut().replace(Session { app, listeners }));
    if previous.is_some() {
        log::warn!("replaced an existing page session");
    }
}

fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        log::debug!("console logger already installed: {e}");
    }
}

/// Embedded config block, or defaults when absent or unusable.
fn load_config(document: &Document) -> SiteConfig {
    let Some(el) = document.get_element_by_id(SITE_CONFIG) else {
        return SiteConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using default site config");
            SiteConfig::default()
        }
    }
}

// =============================================================
// Listener wiring
// =============================================================

fn wire(app: &Rc<RefCell<BrowserApp>>, window: &Window, document: &Document) -> Vec<Listener> {
    let mut wiring = Wiring { app: Rc::downgrade(app), listeners: Vec::new() };

    for id in [THEME_SWITCH_DESKTOP, THEME_SWITCH_MOBILE] {
        if let Some(el) = by_id::<Element>(document, id) {
            wiring.click(&el, Role::ThemeSwitch, |_| EventData::None);
        }
    }

    let has_menu = app.borrow().page().has_mobile_menu();
    if let Some(button) = by_id::<Element>(document, MOBILE_MENU_BUTTON).filter(|_| has_menu) {
        wiring.click(&button, Role::MobileMenuButton, |_| EventData::None);
    }

    if let Some(hero) = by_id::<Element>(document, HERO_BOOKING) {
        wiring.click(&hero, Role::HeroBookingButton, |_| EventData::None);
    }
    for button in query_all::<Element>(document, CARD_BOOKING_SELECTOR) {
        wiring.click(&button, Role::CarBookingButton, |event| {
            EventData::CarType(current_element(event).and_then(|el| el.get_attribute("data-car-type")))
        });
    }
    if let Some(close) = by_id::<Element>(document, CLOSE_BOOKING) {
        wiring.click(&close, Role::CloseBookingButton, |_| EventData::None);
    }

    let (modal, form) = {
        let app = app.borrow();
        (app.page().booking_modal().cloned(), app.page().booking_form().cloned())
    };
    if let Some(modal) = modal {
        let root = modal.clone();
        wiring.click(&modal, Role::BookingModal, move |event| EventData::Backdrop {
            on_root: event
                .target()
                .is_some_and(|target| target.dyn_ref::<Node>().is_some_and(|node| root.is_same_node(Some(node)))),
        });
    }
    if let Some(form) = form {
        let source = form.clone();
        wiring.listen(&form, "submit", Role::BookingForm, EventKind::Submit, move |_| {
            EventData::Form(form_values(&source))
        });
    }

    for anchor in query_all::<Element>(document, ANCHOR_SELECTOR) {
        wiring.click(&anchor, Role::InPageAnchor, |event| {
            EventData::Href(current_element(event).and_then(|el| el.get_attribute("href")).unwrap_or_default())
        });
    }

    if let Some(button) = by_id::<Element>(document, BACK_TO_TOP) {
        wiring.click(&button, Role::BackToTop, |_| EventData::None);
    }

    wiring.listen(window, "scroll", Role::Window, EventKind::Scroll, |_| EventData::None);

    wiring.listeners
}

struct Wiring {
    app: Weak<RefCell<BrowserApp>>,
    listeners: Vec<Listener>,
}

impl Wiring {
    fn click(&mut self, target: &EventTarget, role: Role, extract: impl Fn(&Event) -> EventData + 'static) {
        self.listen(target, "click", role, EventKind::Click, extract);
    }

    /// Attach a listener that extracts the payload, dispatches it, and
    /// applies `preventDefault` when the handler asks for it.
    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        role: Role,
        event_kind: EventKind,
        extract: impl Fn(&Event) -> EventData + 'static,
    ) {
        let app = self.app.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(app) = app.upgrade() else {
                return;
            };
            let data = extract(&event);
            let outcome = match app.try_borrow_mut() {
                Ok(mut app) => app.dispatch(role, event_kind, &data),
                Err(_) => {
                    log::debug!("{role:?} {kind} skipped: session busy");
                    return;
                }
            };
            if outcome == Outcome::PreventDefault {
                event.prevent_default();
            }
        });
        match target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()) {
            Ok(()) => self.listeners.push(Listener { target: target.clone(), kind, callback }),
            Err(e) => log::warn!("failed to attach {kind} listener for {role:?}: {}", describe(&e)),
        }
    }
}

fn current_element(event: &Event) -> Option<Element> {
    event.current_target().and_then(|target| target.dyn_ref::<Element>().cloned())
}

fn form_values(form: &HtmlFormElement) -> FormValues {
    let mut values = FormValues::new();
    let Ok(data) = FormData::new_with_form(form) else {
        log::warn!("booking form data unavailable");
        return values;
    };
    for field in BookingField::ALL {
        if let Some(value) = data.get(field.id()).as_string() {
            values.insert(field.id(), value);
        }
    }
    values
}
