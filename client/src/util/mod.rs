//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (window listeners, intersection
//! observers, the clock) from component logic so the state machines can be
//! exercised natively.

pub mod clock;
pub mod listener;
pub mod pointer_source;
pub mod viewport;
