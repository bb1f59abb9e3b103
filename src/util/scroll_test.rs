#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn bare_fragment_hrefs_qualify() {
    assert_eq!(fragment_from_href("#monitoring"), Some("monitoring"));
    assert_eq!(fragment_from_href("#top"), Some("top"));
}

#[test]
fn empty_fragment_does_not_qualify() {
    assert_eq!(fragment_from_href("#"), None);
}

#[test]
fn path_and_external_hrefs_do_not_qualify() {
    assert_eq!(fragment_from_href("/about"), None);
    assert_eq!(fragment_from_href("/about#team"), None);
    assert_eq!(fragment_from_href("https://example.com#x"), None);
    assert_eq!(fragment_from_href(""), None);
}

#[test]
fn scroll_to_fragment_is_noop_but_callable() {
    scroll_to_fragment("monitoring");
}
