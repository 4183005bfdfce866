//! View-state rules for the page session.
//!
//! DESIGN
//! ======
//! State is split by component (`theme`, `booking`, `nav`, `cars`) so each
//! rule set can be tested without a page. `ui` aggregates what the
//! controller tracks between events.

pub mod booking;
pub mod cars;
pub mod nav;
pub mod theme;
pub mod ui;
