//! Transient UI state owned by the root view.
//!
//! DESIGN
//! ======
//! Each concern is independent: pointer position, menu disclosure, and
//! per-section reveal latches share no fields and impose no ordering on one
//! another.

pub mod menu;
pub mod pointer;
pub mod reveal;
