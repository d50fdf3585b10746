//! Interaction layer for the landing page: navigation menu, scroll-driven
//! header / scroll-up / active-link styling, reveal animations and the
//! contact form relay.
//!
//! Loading the module only installs the panic hook and compile-time relay
//! configuration.  The page bootstrap then calls, in order:
//!
//! ```js
//! init_relay_config_js({ serviceId, templateId, publicKey }); // optional
//! init_page();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod macros;

pub mod command_executors;
pub mod constants;
pub mod controller;
pub mod dom_utils;
pub mod errors;
pub mod messages;
pub mod network;
pub mod page;
pub mod reveal;
pub mod state;
pub mod ui;
pub mod update;

#[cfg(debug_assertions)]
mod debug;

use controller::PageController;
use errors::PageError;
use page::PageHandles;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<PageController>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Relay identifiers may be baked in at build time; otherwise the page
    // supplies them through `init_relay_config_js` before the first submit.
    if let Err(e) = network::init_relay_config() {
        crate::debug_log!("Relay config not set at compile time ({}). Waiting for runtime config…", e);
    }
    Ok(())
}

/// Wire up every page interaction.  Fails if a required element is missing.
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;

    let ctrl = install(&window, &document).map_err(|e| {
        web_sys::console::error_1(&format!("FATAL: page setup failed: {}", e).into());
        e
    })?;
    CONTROLLER.with(|cell| cell.replace(Some(ctrl)));

    reveal::register_reveal_animations(
        &reveal::RevealDefaults::default(),
        &reveal::default_reveal_groups(),
    );
    Ok(())
}

/// Resolve the page handles, attach all listeners and apply the initial
/// scroll state.  Returns the controller driving the page.
pub fn install(window: &Window, document: &Document) -> Result<Rc<PageController>, PageError> {
    let page = PageHandles::from_document(document)?;
    let ctrl = PageController::new(page);
    ui::events::setup_page_event_handlers(&ctrl, window)?;
    ui::sync_scroll_state(&ctrl, window)?;
    crate::debug_log!("page controller installed");
    Ok(ctrl)
}

/// Run `f` against the installed controller, if `init_page` has succeeded.
pub fn with_controller<R>(f: impl FnOnce(&Rc<PageController>) -> R) -> Option<R> {
    CONTROLLER.with(|cell| cell.borrow().as_ref().map(f))
}
