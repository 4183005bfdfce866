//! `document.readyState` values.
//!
//! `Document::ready_state` hands back the raw string; the session decides
//! from it whether to start now or wait for `DOMContentLoaded`.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse a `readyState` string. Unknown values are treated as complete
    /// so startup is never deferred on an event that will not fire.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    /// Whether startup must wait for `DOMContentLoaded`.
    pub fn defers_startup(self) -> bool {
        self == Self::Loading
    }
}
