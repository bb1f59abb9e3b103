#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_string_is_none_without_a_browser() {
    assert_eq!(load_string("anything"), None);
}

#[test]
fn save_string_is_noop_but_callable() {
    save_string("anything", "value");
    assert_eq!(load_string("anything"), None);
}
