//! Skills grid (`#stack`).

use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::components::reveal::Reveal;
use crate::content::{SKILLS, STACK_HEADING, STACK_SUBHEADING};
use crate::state::reveal::{item_key, stagger_delay_ms};

const STAGGER_STEP_MS: u32 = 100;

#[component]
pub fn Stack() -> impl IntoView {
    view! {
        <section id="stack" class="section">
            <div class="section__inner">
                <Reveal key="stack" class="section__header">
                    <h3 class="section__title text-gradient">{STACK_HEADING}</h3>
                    <p class="section__subtitle">{STACK_SUBHEADING}</p>
                </Reveal>

                <div class="card-grid">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <Reveal
                                    key=item_key("stack", i)
                                    delay_ms=stagger_delay_ms(i, STAGGER_STEP_MS)
                                    class="card"
                                >
                                    <div class="card__sheen"></div>
                                    <Glyph icon=skill.icon class="card__icon"/>
                                    <h4 class="card__title">{skill.name}</h4>
                                    <p class="card__body">{skill.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
