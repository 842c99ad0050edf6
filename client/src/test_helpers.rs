//! Synthetic event sources for driving the interactive state in native tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::pointer::PointerPosition;
use crate::util::listener::ListenerRegistration;
use crate::util::pointer_source::PointerSource;
use crate::util::viewport::{ObserverRegistry, ViewportObserver};

type Handlers = Rc<RefCell<Vec<(u64, Rc<dyn Fn(PointerPosition)>)>>>;

/// Pointer source whose moves are emitted by the test.
#[derive(Clone, Default)]
pub struct ManualPointerSource {
    handlers: Handlers,
    next_id: Rc<RefCell<u64>>,
    detach_calls: Rc<RefCell<u32>>,
}

impl ManualPointerSource {
    /// Deliver a move to every attached handler.
    pub fn emit(&self, x: f64, y: f64) {
        let handlers: Vec<_> = self.handlers.borrow().iter().map(|(_, h)| Rc::clone(h)).collect();
        for handler in handlers {
            handler(PointerPosition::new(x, y));
        }
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn detach_calls(&self) -> u32 {
        *self.detach_calls.borrow()
    }
}

impl PointerSource for ManualPointerSource {
    fn subscribe(&self, handler: Box<dyn Fn(PointerPosition)>) -> ListenerRegistration {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.handlers.borrow_mut().push((id, Rc::from(handler)));

        let handlers = Rc::clone(&self.handlers);
        let detach_calls = Rc::clone(&self.detach_calls);
        ListenerRegistration::new(move || {
            *detach_calls.borrow_mut() += 1;
            handlers.borrow_mut().retain(|(other, _)| *other != id);
        })
    }
}

/// Viewport observer whose intersections are reported by the test.
#[derive(Default)]
pub struct ManualViewportObserver {
    registry: ObserverRegistry<&'static str>,
}

impl ManualViewportObserver {
    /// Report that `target` now overlaps the viewport.
    pub fn intersect(&self, target: &'static str) -> bool {
        self.registry.fire(&target)
    }

    pub fn is_observing(&self, target: &'static str) -> bool {
        self.registry.is_observing(&target)
    }
}

impl ViewportObserver for ManualViewportObserver {
    type Target = &'static str;

    fn observe(&self, target: &Self::Target, on_first_intersect: Box<dyn FnOnce()>) {
        self.registry.register(*target, on_first_intersect);
    }

    fn unobserve(&self, target: &Self::Target) {
        self.registry.remove(target);
    }
}
