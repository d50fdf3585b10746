//! Error types surfaced by the page controller.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that abort controller start-up.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("required element #{0} not found")]
    MissingElement(&'static str),

    #[error("element #{id} is not a <{expected}>")]
    WrongElementType {
        id: &'static str,
        expected: &'static str,
    },

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(js_error_text(&value))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Failures of the e-mail relay call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("relay not configured")]
    NotConfigured,

    #[error("relay library unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Rejected(String),
}

/// Best-effort human readable text for a thrown / rejected JS value.
///
/// EmailJS rejects with `{status, text}`; plain `Error` objects carry
/// `message`. Anything else falls back to its debug form.
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    for key in ["text", "message"] {
        if let Ok(field) = js_sys::Reflect::get(value, &JsValue::from_str(key)) {
            if let Some(s) = field.as_string() {
                return s;
            }
        }
    }
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_error_messages_name_the_element() {
        assert_eq!(
            PageError::MissingElement("contact-user").to_string(),
            "required element #contact-user not found"
        );
        assert_eq!(
            PageError::WrongElementType { id: "contact-user", expected: "input" }.to_string(),
            "element #contact-user is not a <input>"
        );
    }

    #[test]
    fn rejected_relay_error_displays_detail_only() {
        assert_eq!(RelayError::Rejected("Forbidden".into()).to_string(), "Forbidden");
        assert_eq!(RelayError::NotConfigured.to_string(), "relay not configured");
    }
}
