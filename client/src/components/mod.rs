//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and sections. Interactive ones receive
//! read-only signals plus callbacks from the root view; reveal wrappers read
//! the shared visibility latches from context.

pub mod about;
pub mod backdrop;
pub mod contact;
pub mod focus;
pub mod footer;
pub mod glyph;
pub mod hero;
pub mod navbar;
pub mod portrait;
pub mod projects;
pub mod reveal;
pub mod stack;
