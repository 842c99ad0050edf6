//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has one page; navigation between its sections is handled by the
//! browser's fragment scrolling, so there is no router.

pub mod portfolio;
