//! Event routing: `(Role, EventKind)` → handler.
//!
//! The browser layer translates DOM events into a role, a kind and an
//! `EventData` payload and calls `App::dispatch`. Tests call the same entry
//! point directly.

use std::collections::HashMap;

use crate::state::booking::FormValues;

/// Which page element (or environment source) an event comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    ThemeSwitch,
    MobileMenuButton,
    HeroBookingButton,
    CarBookingButton,
    CloseBookingButton,
    BookingModal,
    BookingForm,
    InPageAnchor,
    BackToTop,
    Window,
    ScrollTimer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    Scroll,
    Timer,
}

/// Payload extracted from the DOM event.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventData {
    #[default]
    None,
    /// `data-car-type` of the clicked card button.
    CarType(Option<String>),
    /// Whether the click landed on the modal root itself.
    Backdrop { on_root: bool },
    /// `href` attribute of the clicked anchor.
    Href(String),
    Form(FormValues),
}

/// What the browser layer should do with the native event afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No handler registered for this role/kind.
    Unhandled,
    /// Handled; let the default browser action proceed.
    Default,
    /// Handled; call `preventDefault`.
    PreventDefault,
}

pub type Handler<A> = fn(&mut A, &EventData) -> Outcome;

/// Registered handlers keyed by element role and event kind.
pub struct HandlerTable<A> {
    handlers: HashMap<(Role, EventKind), Handler<A>>,
}

impl<A> Default for HandlerTable<A> {
    fn default() -> Self {
        Self { handlers: HashMap::new() }
    }
}

impl<A> HandlerTable<A> {
    pub fn register(&mut self, role: Role, kind: EventKind, handler: Handler<A>) {
        self.handlers.insert((role, kind), handler);
    }

    pub fn get(&self, role: Role, kind: EventKind) -> Option<Handler<A>> {
        self.handlers.get(&(role, kind)).copied()
    }

    pub fn contains(&self, role: Role, kind: EventKind) -> bool {
        self.handlers.contains_key(&(role, kind))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
