//! Root view: owns the interactive state and composes the page.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::backdrop::{BackgroundGrid, GlowOverlay};
use crate::components::navbar::Navbar;
use crate::content::{HERO_TAGLINE, PAGE_TITLE};
use crate::pages::portfolio::PortfolioPage;
use crate::state::menu::MenuState;
use crate::state::pointer::PointerPosition;
use crate::state::reveal::SectionVisibility;

/// Root application component.
///
/// Pointer position and menu state live here and are handed down as read-only
/// signals with update callbacks. Reveal latches are shared through context
/// because every section wraps its own content.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let menu = RwSignal::new(MenuState::default());
    let pointer = RwSignal::new(PointerPosition::default());
    let visibility = RwSignal::new(SectionVisibility::default());
    provide_context(visibility);

    #[cfg(feature = "csr")]
    {
        use crate::components::reveal::ViewportHandle;
        use crate::state::pointer::PointerTracker;
        use crate::util::pointer_source::WindowPointerSource;

        let observer: ViewportHandle = StoredValue::new_local(crate::util::viewport::browser_observer());
        provide_context(observer);

        let tracker = StoredValue::new_local(PointerTracker::mount(&WindowPointerSource, move |p| pointer.set(p)));
        on_cleanup(move || {
            let _ = tracker.try_update_value(PointerTracker::unmount);
        });
    }

    let on_toggle = Callback::new(move |()| menu.update(MenuState::toggle));

    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=HERO_TAGLINE/>

        <div class="app">
            <BackgroundGrid/>
            <GlowOverlay pointer=pointer.read_only()/>
            <Navbar menu=menu.read_only() on_toggle=on_toggle/>
            <PortfolioPage/>
        </div>
    }
}
