//! Environment seams shared by the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage and timers are browser services; these modules define the ports
//! the controller talks to plus in-memory implementations used natively.
//! `ready` interprets the document's load state for the session.

pub mod debounce;
pub mod ready;
pub mod storage;
