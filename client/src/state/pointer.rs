//! Latest pointer coordinate and the tracker that keeps it current.
//!
//! DESIGN
//! ======
//! The stored position is last-write-wins: every move replaces it, with no
//! history, throttling or smoothing. Easing of the glow overlay is a CSS
//! transition, not application state.
//!
//! The tracker holds the listener registration for the lifetime of the root
//! view. Unmounting releases it; releasing again is a no-op.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::util::listener::ListenerRegistration;
use crate::util::pointer_source::PointerSource;

/// Half the glow overlay's edge length. The overlay is centered on the pointer.
pub const GLOW_RADIUS_PX: f64 = 192.0;

/// Viewport-relative pointer coordinate. Starts at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Replace the stored coordinate. Values are not range-checked: zero and
    /// out-of-viewport coordinates both occur during resizes.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Top-left corner of the glow overlay for this pointer position.
    pub fn glow_anchor(self) -> GlowAnchor {
        GlowAnchor {
            left: self.x - GLOW_RADIUS_PX,
            top: self.y - GLOW_RADIUS_PX,
        }
    }
}

/// Absolute offset of the glow overlay, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowAnchor {
    pub left: f64,
    pub top: f64,
}

impl GlowAnchor {
    /// Inline `left`/`top` declarations for the overlay element.
    pub fn to_style(self) -> String {
        format!("left: {}px; top: {}px;", self.left, self.top)
    }
}

/// Owns the pointer listener for one mounted view.
#[derive(Debug)]
pub struct PointerTracker {
    registration: ListenerRegistration,
}

impl PointerTracker {
    /// Subscribe `on_move` to `source` until [`PointerTracker::unmount`] or drop.
    pub fn mount<S>(source: &S, on_move: impl Fn(PointerPosition) + 'static) -> Self
    where
        S: PointerSource + ?Sized,
    {
        log::debug!("pointer tracker mounted");
        let registration = source.subscribe(Box::new(on_move));
        Self { registration }
    }

    pub fn unmount(&mut self) {
        if self.registration.is_active() {
            log::debug!("pointer tracker unmounted");
        }
        self.registration.release();
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.registration.is_active()
    }
}
