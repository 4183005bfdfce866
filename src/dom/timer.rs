//! `gloo-timers` scheduler for the scroll debounce.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Timeout;

use super::page::DomPage;
use super::storage::LocalStore;
use crate::controller::App;
use crate::controller::events::{EventData, EventKind, Role};
use crate::util::debounce::Scheduler;

pub type BrowserApp = App<DomPage, LocalStore, BrowserScheduler>;

/// Holds at most one pending `setTimeout`. Dropping the handle clears it.
pub struct BrowserScheduler {
    app: Weak<RefCell<BrowserApp>>,
    pending: Option<Timeout>,
}

impl BrowserScheduler {
    pub fn new(app: Weak<RefCell<BrowserApp>>) -> Self {
        Self { app, pending: None }
    }
}

impl Scheduler for BrowserScheduler {
    fn arm(&mut self, delay: Duration) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let app = self.app.clone();
        self.pending = Some(Timeout::new(millis, move || {
            let Some(app) = app.upgrade() else {
                return;
            };
            match app.try_borrow_mut() {
                Ok(mut app) => {
                    app.dispatch(Role::ScrollTimer, EventKind::Timer, &EventData::None);
                }
                Err(_) => log::debug!("scroll timer fired while the session was busy"),
            }
        }));
    }

    fn cancel(&mut self) {
        self.pending = None;
    }

    fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}
