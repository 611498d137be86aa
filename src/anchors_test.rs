use super::*;

#[test]
fn fragment_of_strips_hash() {
    assert_eq!(fragment_of("#about"), Some("about"));
    assert_eq!(fragment_of("#"), Some(""));
}

#[test]
fn fragment_of_ignores_other_hrefs() {
    assert_eq!(fragment_of("/cv.pdf"), None);
    assert_eq!(fragment_of("https://example.com/#about"), None);
    assert_eq!(fragment_of(""), None);
}

#[test]
fn click_on_existing_target_prevents_and_scrolls_once() {
    let patches = on_click("#projects", |id| id == "projects");
    assert_eq!(
        patches,
        vec![Patch::PreventDefault, Patch::ScrollIntoView(Target::Fragment("projects".to_owned()))]
    );
}

#[test]
fn click_on_missing_target_prevents_without_scroll() {
    let patches = on_click("#gone", |_| false);
    assert_eq!(patches, vec![Patch::PreventDefault]);
}

#[test]
fn bare_hash_never_looks_up_target() {
    let patches = on_click("#", |_| true);
    assert_eq!(patches, vec![Patch::PreventDefault]);
}

#[test]
fn external_link_left_to_browser() {
    assert!(on_click("https://github.com/someone", |_| true).is_empty());
    assert!(on_click("resume.html", |_| true).is_empty());
}
