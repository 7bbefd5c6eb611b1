//! Window-level navigation helpers.
//!
//! Full-page reload and history navigation require a browser environment;
//! SSR builds compile these to no-ops.

/// Reload the current page — the "Try Again" recovery path for failed lookups.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Navigate to the previous history entry.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }
}
