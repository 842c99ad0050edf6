//! Decorative glyphs drawn as CSS masks.

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;

use leptos::prelude::*;

use crate::content::Icon;

/// Class list for a glyph, with optional extra classes appended.
pub fn glyph_class(icon: Icon, extra: &str) -> String {
    if extra.is_empty() {
        format!("glyph glyph--{}", icon.slug())
    } else {
        format!("glyph glyph--{} {extra}", icon.slug())
    }
}

/// Icon masked by the stylesheet's `.glyph--<slug>` rule; hidden from assistive tech.
#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <span class=glyph_class(icon, class) aria-hidden="true"></span> }
}
