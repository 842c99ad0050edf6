//! Page footer with social links and the copyright line.

use leptos::prelude::*;

use crate::content::{FOOTER_CREDIT, OWNER_NAME, SOCIAL_LINKS};
use crate::util::clock::{copyright_line, current_year};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year(), OWNER_NAME);

    view! {
        <footer class="footer">
            <div class="footer__links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href class="footer__link">{link.label}</a> })
                    .collect_view()}
            </div>
            <p class="footer__credit">{copyright}" | "{FOOTER_CREDIT}</p>
        </footer>
    }
}
