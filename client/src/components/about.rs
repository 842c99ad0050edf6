//! Biography section (`#about`): profile image and education timeline.

use leptos::prelude::*;

use crate::components::glyph::Glyph;
use crate::components::portrait::Portrait;
use crate::components::reveal::Reveal;
use crate::content::{ABOUT_HEADING, ABOUT_SUBHEADING, EDUCATION, EducationEntry, Icon, OWNER_NAME, PROFILE_IMAGE};
use crate::state::reveal::{RevealVariant, item_key};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="section__inner">
                <Reveal key="about" class="section__header">
                    <h3 class="section__title text-gradient">{ABOUT_HEADING}</h3>
                    <p class="section__subtitle">{ABOUT_SUBHEADING}</p>
                </Reveal>

                <div class="split">
                    <Reveal key=item_key("about", 0) variant=RevealVariant::SlideFromLeft>
                        <Portrait src=PROFILE_IMAGE alt=OWNER_NAME badge=Icon::Sparkles/>
                    </Reveal>
                    <Reveal key=item_key("about", 1) variant=RevealVariant::SlideFromRight class="timeline">
                        {EDUCATION.iter().map(|entry| view! { <EducationCard entry=*entry/> }).collect_view()}
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn EducationCard(entry: EducationEntry) -> impl IntoView {
    view! {
        <div class=format!("edu-card edu-card--{}", entry.accent.slug())>
            <div class="edu-card__header">
                <div class="edu-card__icon">
                    <Glyph icon=entry.icon/>
                </div>
                <div>
                    <h4 class="edu-card__title">{entry.title}</h4>
                    <p class="edu-card__period">{entry.period}</p>
                </div>
            </div>
            {entry.qualification.map(|q| view! { <p class="edu-card__qualification">{q}</p> })}
            <p class="edu-card__field">{entry.field}</p>
            {entry.institution.map(|i| view! { <p class="edu-card__meta">{i}</p> })}
            <p class="edu-card__meta">{entry.board}</p>
        </div>
    }
}
