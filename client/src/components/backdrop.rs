//! Fixed decorative layers behind the page: the drifting grid and the cursor glow.

use leptos::prelude::*;

use crate::state::pointer::PointerPosition;

/// Grid pattern animated purely in CSS.
#[component]
pub fn BackgroundGrid() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__grid"></div>
        </div>
    }
}

/// Radial glow that trails the pointer. Easing comes from a CSS transition
/// on `left`/`top`; the overlay itself ignores pointer events.
#[component]
pub fn GlowOverlay(#[prop(into)] pointer: Signal<PointerPosition>) -> impl IntoView {
    view! {
        <div
            class="glow"
            aria-hidden="true"
            style=move || pointer.get().glow_anchor().to_style()
        ></div>
    }
}
