use super::*;

#[test]
fn badge_class_joins_gradient_stops() {
    assert_eq!(badge_class("purple-600 pink-600"), "badge badge--purple-600--pink-600");
}

#[test]
fn badge_class_tolerates_extra_whitespace() {
    assert_eq!(badge_class("  blue-600   cyan-600 "), "badge badge--blue-600--cyan-600");
}

#[test]
fn every_project_gets_a_distinct_badge() {
    let classes: std::collections::HashSet<_> = PROJECTS.iter().map(|p| badge_class(p.accent_gradient)).collect();
    assert_eq!(classes.len(), PROJECTS.len());
}
