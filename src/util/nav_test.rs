use super::*;

#[test]
fn exact_path_match_is_active() {
    assert!(is_active("/about", "/about"));
    assert!(is_active("/", "/"));
}

#[test]
fn only_the_matching_link_is_active() {
    let current = "/about";
    let marked: Vec<&str> = ["/", "/about", "/contact"]
        .into_iter()
        .filter(|link| is_active(link, current))
        .collect();
    assert_eq!(marked, vec!["/about"]);
}

#[test]
fn prefix_matches_are_rejected() {
    assert!(!is_active("/about", "/about/team"));
    assert!(!is_active("/", "/about"));
    assert!(!is_active("/services", "/service"));
}

#[test]
fn trailing_slash_is_not_normalized() {
    assert!(!is_active("/about", "/about/"));
}

#[test]
fn nav_links_are_absolute_and_distinct() {
    for (path, label) in NAV_LINKS {
        assert!(path.starts_with('/'));
        assert!(!label.is_empty());
    }
    for (i, (a, _)) in NAV_LINKS.iter().enumerate() {
        for (b, _) in NAV_LINKS.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
