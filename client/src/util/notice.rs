//! User-facing acknowledgement after a form hand-off.

/// Show `message` to the visitor with a browser alert. No-op outside the
/// browser.
pub fn acknowledge(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::info!("acknowledged: {message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
