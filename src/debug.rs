// Debug helpers for e2e tests - expose controller state to the page.

use wasm_bindgen::prelude::*;

use crate::state::RequestState;

#[wasm_bindgen]
pub fn debug_request_state() -> String {
    crate::with_controller(|ctrl| match ctrl.request_state() {
        RequestState::Idle => "idle",
        RequestState::Sending => "sending",
    })
    .unwrap_or("uninitialized")
    .to_string()
}

#[wasm_bindgen]
pub fn debug_status_text() -> String {
    crate::with_controller(|ctrl| ctrl.status().map(|s| s.text))
        .flatten()
        .unwrap_or_default()
}
