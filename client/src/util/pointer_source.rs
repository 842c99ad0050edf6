//! Pointer-movement event sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pointer tracker depends on this trait instead of the window directly,
//! so tests can drive synthetic moves and assert that nothing is delivered
//! after teardown.

use crate::state::pointer::PointerPosition;
use crate::util::listener::ListenerRegistration;

/// Something that delivers pointer coordinates until its registration is released.
pub trait PointerSource {
    fn subscribe(&self, handler: Box<dyn Fn(PointerPosition)>) -> ListenerRegistration;
}

/// Global `mousemove` listener on `window`, reporting viewport (client) coordinates.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowPointerSource;

#[cfg(feature = "csr")]
impl PointerSource for WindowPointerSource {
    fn subscribe(&self, handler: Box<dyn Fn(PointerPosition)>) -> ListenerRegistration {
        let handle = leptos::prelude::window_event_listener(leptos::ev::mousemove, move |ev| {
            handler(PointerPosition::new(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        ListenerRegistration::new(move || handle.remove())
    }
}
