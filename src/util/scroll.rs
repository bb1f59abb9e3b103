//! Smooth scrolling for same-page anchor links.
//!
//! Activating an anchor whose href is a bare fragment cancels the default
//! jump and animates the viewport to the target element instead. Unknown
//! fragments and missing targets are no-ops.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Extract the fragment from a same-page anchor href. Only bare `#...`
/// hrefs qualify; path or external hrefs return `None` so normal
/// navigation proceeds.
#[must_use]
pub fn fragment_from_href(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() { None } else { Some(fragment) }
}

/// Smooth-scroll the element with id `fragment` into view.
pub fn scroll_to_fragment(fragment: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(target) = doc.get_element_by_id(fragment) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = fragment;
    }
}
