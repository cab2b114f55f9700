//! Thin wrappers over `window` APIs used by page handlers.
//!
//! Outside the browser these degrade to no-ops: confirmation is declined so
//! nothing destructive can run during server rendering.

/// Ask the user to confirm `message` with the native dialog.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Full-page navigation, used where the backend dictates the target.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
