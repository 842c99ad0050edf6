//! Call-to-action section (`#contact`).

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{CONTACT_BODY, CONTACT_EMAIL, CONTACT_HEADING, RESUME};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section section--narrow">
            <Reveal key="contact" class="contact">
                <h3 class="section__title text-gradient">{CONTACT_HEADING}</h3>
                <p class="contact__body">{CONTACT_BODY}</p>
                <div class="contact__actions">
                    <a href=CONTACT_EMAIL.href class="button button--primary">
                        {CONTACT_EMAIL.label}
                    </a>
                    <a href=RESUME.href class="button button--outline">
                        {RESUME.label}
                    </a>
                </div>
            </Reveal>
        </section>
    }
}
