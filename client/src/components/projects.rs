//! Project showcase (`#projects`).

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{PROJECTS, PROJECTS_HEADING, PROJECTS_SUBHEADING};
use crate::state::reveal::{item_key, stagger_delay_ms};

const STAGGER_STEP_MS: u32 = 200;

/// Badge class for a two-stop accent such as `purple-600 pink-600`.
pub fn badge_class(accent_gradient: &str) -> String {
    let stops: Vec<&str> = accent_gradient.split_whitespace().collect();
    format!("badge badge--{}", stops.join("--"))
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="section__inner">
                <Reveal key="projects" class="section__header">
                    <h3 class="section__title text-gradient">{PROJECTS_HEADING}</h3>
                    <p class="section__subtitle">{PROJECTS_SUBHEADING}</p>
                </Reveal>

                <div class="project-list">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal
                                    key=item_key("projects", i)
                                    delay_ms=stagger_delay_ms(i, STAGGER_STEP_MS)
                                    class="card card--project"
                                >
                                    <div class="card__sheen"></div>
                                    <div class="card__content">
                                        <span class=badge_class(project.accent_gradient)>"Featured"</span>
                                        <h4 class="card__title card__title--large">{project.title}</h4>
                                        <p class="card__tech">{project.tech_stack}</p>
                                        <p class="card__body">{project.description}</p>
                                        <a href="#" class="card__link">
                                            "View Case Study"
                                            <span class="card__link-arrow">"→"</span>
                                        </a>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
