//! Fixed top navigation with the mobile disclosure panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Desktop widths show the anchor links inline. Below the breakpoint the
//! links collapse behind a toggle button, and the panel markup exists only
//! while the menu is open.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::content::{BRAND, Icon, NAV_LINKS, NavLink};
use crate::state::menu::MenuState;
use crate::state::reveal::stagger_delay_ms;

/// Links rendered in the mobile panel, or `None` when the panel is absent.
pub fn mobile_panel_links(menu: MenuState) -> Option<&'static [NavLink]> {
    menu.is_open().then_some(NAV_LINKS)
}

/// `aria-expanded` value for the toggle button.
pub fn expanded_attr(menu: MenuState) -> &'static str {
    if menu.is_open() { "true" } else { "false" }
}

#[component]
pub fn Navbar(#[prop(into)] menu: Signal<MenuState>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__brand enter enter--from-left">
                    <Glyph icon=Icon::Terminal class="navbar__brand-icon"/>
                    <h1 class="navbar__brand-name text-gradient">{BRAND}</h1>
                </div>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <a
                                    class="navbar__link enter enter--drop"
                                    href=link.href()
                                    style=format!("animation-delay: {}ms;", stagger_delay_ms(i, 100))
                                >
                                    {link.label}
                                    <span class="navbar__link-underline"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || expanded_attr(menu.get())
                    on:click=move |_| on_toggle.run(())
                >
                    <svg class="navbar__toggle-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=move || menu.get().icon_path()
                        />
                    </svg>
                </button>
            </div>

            {move || {
                mobile_panel_links(menu.get())
                    .map(|links| {
                        view! {
                            <div class="navbar__panel">
                                {links
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a class="navbar__panel-link" href=link.href()>
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
