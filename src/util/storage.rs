//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only read/write glue so callers do not repeat
//! web-sys plumbing. Values are raw strings; the only persisted entry on
//! this site is the theme preference, which is contractually a literal
//! string rather than JSON.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Load the string stored under `key`, if any.
#[must_use]
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Quota or availability failures are ignored.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}
