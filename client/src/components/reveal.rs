//! Wrapper that plays an entrance transition the first time it scrolls into view.
//!
//! ARCHITECTURE
//! ============
//! The wrapper registers its key in the shared `SectionVisibility` and, in the
//! browser, arms the page's `ViewportObserver` on its element. The first
//! intersection latches the key; the class list is derived from the latch, so
//! the transition runs exactly once.
//!
//! Outside the browser there is no viewport to observe and the key is latched
//! on creation, rendering the content in its final state.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::reveal::arm_reveal;
use crate::state::reveal::{RevealVariant, SectionVisibility, delay_style};
#[cfg(feature = "csr")]
use crate::util::viewport::ViewportObserver;

/// Page-wide observer shared by every `Reveal`, provided by the root view.
#[cfg(feature = "csr")]
pub type ViewportHandle = StoredValue<Box<dyn ViewportObserver<Target = web_sys::Element>>, LocalStorage>;

#[component]
pub fn Reveal(
    #[prop(into)] key: String,
    #[prop(optional)] variant: RevealVariant,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let visibility = expect_context::<RwSignal<SectionVisibility>>();
    visibility.update(|v| v.track(&key));
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let observer = expect_context::<ViewportHandle>();
        let observed = StoredValue::new_local(None::<web_sys::Element>);
        let key = key.clone();

        Effect::new(move || {
            let Some(div) = node_ref.get() else {
                return;
            };
            let element: web_sys::Element = div.into();
            let key_for_cb = key.clone();
            let on_reveal = move || {
                let _ = visibility.try_update(|v| v.reveal(&key_for_cb));
            };
            let armed = visibility.with_untracked(|v| {
                observer.with_value(|o| arm_reveal(&**o, &element, v, &key, on_reveal))
            });
            if armed {
                observed.set_value(Some(element));
            }
        });

        on_cleanup(move || {
            let Some(Some(element)) = observed.try_with_value(Clone::clone) else {
                return;
            };
            let _ = observer.try_with_value(|o| o.unobserve(&element));
        });
    }

    #[cfg(not(feature = "csr"))]
    visibility.update(|v| {
        v.reveal(&key);
    });

    let class_key = key.clone();
    let class_list = move || {
        let revealed = visibility.with(|v| v.is_revealed(&class_key));
        if class.is_empty() {
            variant.class(revealed)
        } else {
            format!("{} {class}", variant.class(revealed))
        }
    };

    view! {
        <div node_ref=node_ref class=class_list style=delay_style(delay_ms)>
            {children()}
        </div>
    }
}
