use leptos::tachys::view::RenderHtml;

use super::*;
use crate::content::{NAV_LINKS, OWNER_NAME};

fn render_app() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <App/> }.to_html())
}

#[test]
fn every_nav_link_has_a_rendered_section() {
    let html = render_app();
    for link in NAV_LINKS {
        assert!(html.contains(&format!("id=\"{}\"", link.anchor)), "no section for #{}", link.anchor);
    }
}

#[test]
fn page_renders_all_sections() {
    let html = render_app();
    for id in ["home", "about", "stack", "projects", "contact"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[test]
fn mobile_panel_absent_on_first_render() {
    let html = render_app();
    assert!(!html.contains("navbar__panel"));
    assert!(html.contains("aria-expanded=\"false\""));
}

#[test]
fn content_renders_in_final_state_without_a_viewport() {
    let html = render_app();
    assert!(html.contains("reveal--visible"));
    assert!(html.contains(OWNER_NAME));
}
