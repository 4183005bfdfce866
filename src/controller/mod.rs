//! Page-session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session's UI state, the page surface, the preference
//! store, and the scroll debounce. The browser layer constructs one `App`
//! per page load, calls `init` once the document is ready, and forwards
//! DOM events through `dispatch`.
//!
//! DESIGN
//! ======
//! Component behavior is split across `theme`, `booking`, `navigation` and
//! `homepage`, each an `impl App` block. Event routing goes through a
//! `HandlerTable` so every wired listener has a named, testable entry.

#[cfg(test)]
#[path = "fake_page.rs"]
pub(crate) mod fake_page;

pub mod booking;
pub mod events;
pub mod homepage;
pub mod navigation;
pub mod page;
pub mod theme;

use std::time::Duration;

use crate::config::SiteConfig;
use crate::state::nav::SpyRules;
use crate::state::ui::UiState;
use crate::util::debounce::{Debouncer, ManualScheduler, Scheduler};
use crate::util::storage::PreferenceStore;

use events::{EventData, EventKind, HandlerTable, Outcome, Role};
use page::Page;

pub struct App<P, S, T> {
    config: SiteConfig,
    rules: SpyRules,
    ui: UiState,
    page: P,
    store: S,
    scroll: Debouncer<T>,
    handlers: HandlerTable<Self>,
}

impl<P: Page, S: PreferenceStore, T: Scheduler> App<P, S, T> {
    pub fn new(config: SiteConfig, page: P, store: S, scheduler: T) -> Self {
        let rules = SpyRules::from_config(&config);
        let scroll = Debouncer::new(scheduler, config.scroll_debounce());
        Self {
            config,
            rules,
            ui: UiState::default(),
            page,
            store,
            scroll,
            handlers: Self::standard_handlers(),
        }
    }

    /// Listener table for every element role the page wires.
    fn standard_handlers() -> HandlerTable<Self> {
        let mut table = HandlerTable::<Self>::default();
        table.register(Role::ThemeSwitch, EventKind::Click, |app, _| {
            app.toggle_theme();
            Outcome::Default
        });
        table.register(Role::MobileMenuButton, EventKind::Click, |app, _| {
            app.toggle_mobile_menu();
            Outcome::Default
        });
        table.register(Role::HeroBookingButton, EventKind::Click, |app, _| {
            app.open_booking(None);
            Outcome::Default
        });
        table.register(Role::CarBookingButton, EventKind::Click, |app, data| {
            let car_type = match data {
                EventData::CarType(car_type) => car_type.as_deref(),
                _ => None,
            };
            app.open_booking(car_type);
            Outcome::Default
        });
        table.register(Role::CloseBookingButton, EventKind::Click, |app, _| {
            app.close_booking();
            Outcome::Default
        });
        table.register(Role::BookingModal, EventKind::Click, |app, data| {
            if matches!(data, EventData::Backdrop { on_root: true }) {
                app.close_booking();
            }
            Outcome::Default
        });
        table.register(Role::BookingForm, EventKind::Submit, |app, data| {
            if let EventData::Form(values) = data {
                // Validation failures are rendered inline by `submit_booking`.
                if app.submit_booking(values).is_err() {
                    log::debug!("booking submission rejected");
                }
            }
            Outcome::PreventDefault
        });
        table.register(Role::InPageAnchor, EventKind::Click, |app, data| match data {
            EventData::Href(href) => app.follow_anchor(href),
            _ => Outcome::Default,
        });
        table.register(Role::BackToTop, EventKind::Click, |app, _| {
            app.back_to_top();
            Outcome::Default
        });
        table.register(Role::Window, EventKind::Scroll, |app, _| {
            app.schedule_scroll_evaluation();
            Outcome::Default
        });
        table.register(Role::ScrollTimer, EventKind::Timer, |app, _| {
            app.on_scroll_timer();
            Outcome::Default
        });
        table
    }

    /// Synchronous startup pass: theme, menu state, car filter, year stamp,
    /// and an immediate scroll-spy evaluation.
    pub fn init(&mut self) {
        let theme = self.startup_theme();
        self.apply_theme(theme);
        self.ui.mobile_menu_open = self.page.has_mobile_menu() && self.page.mobile_menu_open();
        self.apply_car_visibility();
        self.stamp_year();
        let decision = self.evaluate_scroll();
        log::info!(
            "page session started: theme={} active_section={}",
            theme.as_str(),
            decision.section_id
        );
    }

    /// Route an event to its registered handler.
    pub fn dispatch(&mut self, role: Role, kind: EventKind, data: &EventData) -> Outcome {
        match self.handlers.get(role, kind) {
            Some(handler) => handler(self, data),
            None => {
                log::debug!("no handler for {role:?}/{kind:?}");
                Outcome::Unhandled
            }
        }
    }

    /// End the session: drop any pending scroll evaluation.
    pub fn teardown(&mut self) {
        self.scroll.cancel();
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn handlers(&self) -> &HandlerTable<Self> {
        &self.handlers
    }

    pub fn scroll_debounce(&self) -> &Debouncer<T> {
        &self.scroll
    }
}

impl<P: Page, S: PreferenceStore> App<P, S, ManualScheduler> {
    /// Advance virtual time, delivering the scroll timer if it comes due.
    pub fn advance_time(&mut self, by: Duration) -> bool {
        let due = self.scroll.scheduler_mut().advance(by);
        if due {
            self.dispatch(Role::ScrollTimer, EventKind::Timer, &EventData::None);
        }
        due
    }
}
