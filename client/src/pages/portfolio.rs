//! The single portfolio page, sections in document order.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::focus::FocusAreas;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::stack::Stack;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <main class="page">
            <Hero/>
            <About/>
            <Stack/>
            <FocusAreas/>
            <Projects/>
            <Contact/>
        </main>
        <Footer/>
    }
}
