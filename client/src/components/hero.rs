//! Landing section (`#home`). Its entrance plays on load rather than on scroll.

use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::content::{HERO_HEADLINE, HERO_SUBHEADLINE, HERO_TAGLINE, Icon};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__sparkle enter enter--scale">
                <Glyph icon=Icon::Sparkles class="hero__sparkle-icon"/>
            </div>

            <h2 class="hero__headline enter enter--rise">
                <span class="text-gradient">{HERO_HEADLINE}</span>
                <br/>
                <span class="hero__subheadline">{HERO_SUBHEADLINE}</span>
            </h2>

            <p class="hero__tagline enter enter--rise" style="animation-delay: 300ms;">
                {HERO_TAGLINE}
            </p>

            <div class="hero__actions enter enter--scale" style="animation-delay: 600ms;">
                <a href="#projects" class="button button--primary button--glow">
                    <Glyph icon=Icon::Rocket class="button__icon"/>
                    "View Projects"
                </a>
                <a href="#contact" class="button button--outline">
                    "Let's Talk"
                </a>
            </div>

            <div class="hero__scroll-indicator" aria-hidden="true">
                <div class="hero__scroll-wheel"></div>
            </div>
        </section>
    }
}
