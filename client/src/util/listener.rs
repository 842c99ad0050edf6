//! Release guard for event listener registrations.
//!
//! DESIGN
//! ======
//! A registration owns the closure that detaches its listener. Releasing runs
//! that closure at most once, whether through `release()` or `Drop`, so a
//! torn-down view can never leave a callback attached to the window.

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

/// Handle to an attached listener. Dropping it detaches the listener.
pub struct ListenerRegistration {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerRegistration {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }

    #[cfg(test)]
    /// A registration with nothing to detach.
    pub fn inert() -> Self {
        Self { detach: None }
    }

    /// Detach the listener. Later calls are no-ops.
    pub fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListenerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistration")
            .field("active", &self.is_active())
            .finish()
    }
}
