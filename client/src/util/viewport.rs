//! Viewport intersection capability used by scroll-reveal.
//!
//! DESIGN
//! ======
//! Observation is one-shot: a target's callback runs on its first positive
//! intersection and the target is dropped from observation in the same step.
//! Nothing re-arms it, which is what makes reveals "animate once".
//!
//! TRADE-OFFS
//! ==========
//! When the browser lacks `IntersectionObserver` (or refuses to build one)
//! every target is reported as intersecting immediately. Content then renders
//! without its entrance animation instead of staying hidden.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::cell::RefCell;
use std::marker::PhantomData;

/// Reports the first time each observed target enters the viewport.
pub trait ViewportObserver {
    type Target;

    /// Start observing `target`. Observing a target again replaces its callback.
    fn observe(&self, target: &Self::Target, on_first_intersect: Box<dyn FnOnce()>);

    /// Stop observing `target`. Unknown targets are ignored.
    fn unobserve(&self, target: &Self::Target);
}

#[derive(Debug, thiserror::Error)]
pub enum ViewportError {
    #[error("no window available")]
    NoWindow,
    #[error("IntersectionObserver is not supported")]
    Unsupported,
    #[error("IntersectionObserver construction rejected: {0}")]
    Rejected(String),
}

/// Pending one-shot callbacks keyed by target.
pub struct ObserverRegistry<T> {
    pending: RefCell<Vec<(T, Box<dyn FnOnce()>)>>,
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self { pending: RefCell::new(Vec::new()) }
    }
}

impl<T: PartialEq> ObserverRegistry<T> {
    pub fn register(&self, target: T, on_first_intersect: Box<dyn FnOnce()>) {
        let mut pending = self.pending.borrow_mut();
        pending.retain(|(existing, _)| *existing != target);
        pending.push((target, on_first_intersect));
    }

    /// Run and forget the callback for `target`. Returns whether one was pending.
    ///
    /// The entry is removed before the callback runs, so a callback that
    /// observes again or unobserves does not hit a live borrow.
    pub fn fire(&self, target: &T) -> bool {
        let callback = {
            let mut pending = self.pending.borrow_mut();
            pending
                .iter()
                .position(|(existing, _)| existing == target)
                .map(|index| pending.remove(index).1)
        };
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Forget `target` without running its callback.
    pub fn remove(&self, target: &T) -> bool {
        let mut pending = self.pending.borrow_mut();
        let before = pending.len();
        pending.retain(|(existing, _)| existing != target);
        pending.len() != before
    }

    #[cfg(test)]
    pub fn is_observing(&self, target: &T) -> bool {
        self.pending.borrow().iter().any(|(existing, _)| existing == target)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

/// Fallback that treats every target as already visible.
pub struct ImmediateViewportObserver<T> {
    _target: PhantomData<fn(&T)>,
}

impl<T> Default for ImmediateViewportObserver<T> {
    fn default() -> Self {
        Self { _target: PhantomData }
    }
}

impl<T> ViewportObserver for ImmediateViewportObserver<T> {
    type Target = T;

    fn observe(&self, _target: &T, on_first_intersect: Box<dyn FnOnce()>) {
        on_first_intersect();
    }

    fn unobserve(&self, _target: &T) {}
}

#[cfg(feature = "csr")]
pub use browser::{IntersectionViewportObserver, browser_observer};

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{ImmediateViewportObserver, ObserverRegistry, ViewportError, ViewportObserver};

    /// One shared `IntersectionObserver` (threshold 0) for all reveal targets.
    pub struct IntersectionViewportObserver {
        observer: IntersectionObserver,
        registry: Rc<ObserverRegistry<Element>>,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    }

    impl IntersectionViewportObserver {
        pub fn new() -> Result<Self, ViewportError> {
            let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
            let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
            if !supported {
                return Err(ViewportError::Unsupported);
            }

            let registry: Rc<ObserverRegistry<Element>> = Rc::new(ObserverRegistry::default());
            let registry_for_cb = Rc::clone(&registry);
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        observer.unobserve(&target);
                        registry_for_cb.fire(&target);
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(0.0));
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ViewportError::Rejected(format!("{e:?}")))?;

            Ok(Self { observer, registry, _callback: callback })
        }
    }

    impl ViewportObserver for IntersectionViewportObserver {
        type Target = Element;

        fn observe(&self, target: &Element, on_first_intersect: Box<dyn FnOnce()>) {
            self.registry.register(target.clone(), on_first_intersect);
            self.observer.observe(target);
        }

        fn unobserve(&self, target: &Element) {
            if self.registry.remove(target) {
                self.observer.unobserve(target);
            }
        }
    }

    impl Drop for IntersectionViewportObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// The best observer this browser supports.
    pub fn browser_observer() -> Box<dyn ViewportObserver<Target = Element>> {
        match IntersectionViewportObserver::new() {
            Ok(observer) => Box::new(observer),
            Err(e) => {
                log::warn!("scroll reveal falling back to immediate reveal: {e}");
                Box::new(ImmediateViewportObserver::default())
            }
        }
    }
}
