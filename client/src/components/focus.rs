//! "What I Do" split section: workspace image beside the focus areas.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::components::portrait::Portrait;
use crate::components::reveal::Reveal;
use crate::content::{Accent, FOCUS_AREAS, FOCUS_HEADLINE, FOCUS_SUBHEADLINE, Icon, WORKSPACE_IMAGE};
use crate::state::reveal::{RevealVariant, item_key};

#[component]
pub fn FocusAreas() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section__inner split">
                <Reveal key=item_key("focus", 0) variant=RevealVariant::SlideFromLeft>
                    <Portrait src=WORKSPACE_IMAGE alt="Developer" badge=Icon::Globe/>
                </Reveal>

                <Reveal key=item_key("focus", 1) variant=RevealVariant::SlideFromRight class="focus">
                    <h3 class="focus__headline">
                        <span class="text-gradient">{FOCUS_HEADLINE}</span>
                        <br/>
                        <span class="focus__subheadline">{FOCUS_SUBHEADLINE}</span>
                    </h3>
                    <div class="focus__list">
                        {FOCUS_AREAS
                            .iter()
                            .map(|area| {
                                view! {
                                    <div class="focus__item">
                                        <Glyph icon=area.icon class=area_icon_class(area.accent)/>
                                        <div>
                                            <h4 class="focus__title">{area.title}</h4>
                                            <p class="focus__body">{area.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn area_icon_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Indigo => "focus__icon focus__icon--indigo",
        Accent::Purple => "focus__icon focus__icon--purple",
        Accent::Pink => "focus__icon focus__icon--pink",
    }
}
