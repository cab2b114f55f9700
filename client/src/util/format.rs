//! Render-time text helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Optional backend text as displayed: absent and empty are the same.
pub fn optional_text(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

/// Format a backend timestamp in the viewer's locale and time zone.
///
/// Formatting happens in the browser through `Date.toLocaleString`. During
/// server rendering and in native builds the raw value is returned, trimmed.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
