use leptos::logging::warn;

/// Show a blocking browser alert. Falls back to a console warning outside a window.
pub fn blocking_alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                warn!("alert failed: {}", message);
            }
        }
        None => warn!("{}", message),
    }
}

/// Number of accordion title elements rendered below `root`
pub fn count_rendered_titles(root: &web_sys::Element) -> u32 {
    root.query_selector_all(".accordion-title")
        .map(|titles| titles.length())
        .unwrap_or(0)
}
