//! EmailJS bindings.  The library is loaded by the page as a global
//! `emailjs` object; we only use `sendForm`.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::config::RelayConfig;
use crate::errors::{js_error_text, RelayError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = sendForm)]
    fn emailjs_send_form(
        service_id: &str,
        template_id: &str,
        form: &str,
        public_key: &str,
    ) -> Result<Promise, JsValue>;
}

/// Submit the configured form through the relay and wait for the outcome.
pub async fn send_form(config: &RelayConfig) -> Result<(), RelayError> {
    let promise = emailjs_send_form(
        &config.service_id,
        &config.template_id,
        &config.form_selector,
        &config.public_key,
    )
    .map_err(|e| RelayError::Unavailable(js_error_text(&e)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| RelayError::Rejected(js_error_text(&e)))
}
