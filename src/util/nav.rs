//! Navigation link highlighting.
//!
//! A link is active only when its target path equals the current page path
//! exactly. Prefix matches are deliberately rejected so `/` never
//! highlights alongside `/about`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The site's navigation links as `(path, label)` pairs, in header order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/contact", "Contact"),
];

/// Whether `link_path` should be marked active for `current_path`.
#[must_use]
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    link_path == current_path
}
