//! Blocking user-facing alerts.
//!
//! Under hydrate this is `window.alert`, which blocks until dismissed. SSR
//! never handles submit events, so the non-browser path only logs.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Show `message` in a blocking browser dialog.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("alert without window: {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("alert: {message}");
    }
}
