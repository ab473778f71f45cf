//! Dark theme preference.
//!
//! Stored in `localStorage` and reflected as a `data-theme` attribute on the
//! `<html>` element. Outside the browser every call is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "contygo_dark";

pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Stored preference, falling back to the system colour scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }
        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme_name(enabled)) {
                log::warn!("could not apply theme: {e:?}");
            }
        }
    }
}

/// Flip the preference, apply it, and persist it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(e) = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }) {
                log::warn!("could not persist theme: {e:?}");
            }
        }
    }
    next
}
