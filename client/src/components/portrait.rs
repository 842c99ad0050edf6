//! Framed image with a soft halo and a corner badge.

use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::content::Icon;

#[component]
pub fn Portrait(src: &'static str, alt: &'static str, badge: Icon) -> impl IntoView {
    view! {
        <div class="portrait">
            <div class="portrait__halo"></div>
            <img src=src alt=alt class="portrait__image"/>
            <div class="portrait__badge">
                <Glyph icon=badge/>
            </div>
        </div>
    }
}
