use leptos::tachys::view::RenderHtml;

use super::*;

fn render_navbar(state: MenuState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let menu = RwSignal::new(state);
        view! { <Navbar menu=menu on_toggle=Callback::new(|()| {})/> }.to_html()
    })
}

#[test]
fn panel_absent_while_closed() {
    assert!(mobile_panel_links(MenuState::Closed).is_none());
}

#[test]
fn panel_follows_toggle_sequence() {
    let mut menu = MenuState::default();
    assert!(mobile_panel_links(menu).is_none());

    menu.toggle();
    let links = mobile_panel_links(menu).expect("panel present while open");
    assert_eq!(links.len(), NAV_LINKS.len());

    menu.toggle();
    assert!(mobile_panel_links(menu).is_none());
}

#[test]
fn expanded_attr_mirrors_menu() {
    assert_eq!(expanded_attr(MenuState::Closed), "false");
    assert_eq!(expanded_attr(MenuState::Open), "true");
}

#[test]
fn closed_navbar_renders_no_panel() {
    let html = render_navbar(MenuState::Closed);
    assert!(!html.contains("navbar__panel"));
    assert!(html.contains("aria-expanded=\"false\""));
}

#[test]
fn open_navbar_renders_panel_with_every_link() {
    let html = render_navbar(MenuState::Open);
    assert!(html.contains("class=\"navbar__panel\""));
    assert!(html.contains("aria-expanded=\"true\""));
    assert_eq!(html.matches("navbar__panel-link").count(), NAV_LINKS.len());
    for link in NAV_LINKS {
        assert!(html.contains(&format!("href=\"{}\"", link.href())));
    }
}

#[test]
fn toggle_icon_follows_menu_state() {
    assert!(render_navbar(MenuState::Closed).contains(MenuState::Closed.icon_path()));
    assert!(render_navbar(MenuState::Open).contains(MenuState::Open.icon_path()));
}
