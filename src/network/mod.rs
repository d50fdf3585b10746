pub mod config;
pub mod relay;

pub use config::RelayConfig;

use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

use crate::debug_log;

lazy_static! {
    static ref RELAY_CONFIG: RwLock<Option<RelayConfig>> = RwLock::new(None);
}

fn store(config: RelayConfig) {
    *RELAY_CONFIG.write().unwrap_or_else(|e| e.into_inner()) = Some(config);
}

/// Initialise the relay configuration from compile-time variables.
pub fn init_relay_config() -> Result<(), &'static str> {
    store(RelayConfig::new()?);
    Ok(())
}

/// Initialise the relay configuration from a JS object
/// `{ serviceId, templateId, publicKey, formSelector? }`.
#[wasm_bindgen]
pub fn init_relay_config_js(config: JsValue) -> Result<(), JsValue> {
    let config: RelayConfig = serde_wasm_bindgen::from_value(config)?;
    let config = config.validated().map_err(JsValue::from_str)?;
    debug_log!("Initializing relay config from JS (service {})", config.service_id);
    store(config);
    Ok(())
}

/// Current relay configuration, if any has been supplied.
pub fn relay_config() -> Option<RelayConfig> {
    RELAY_CONFIG
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}
