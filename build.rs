// Build script: track the relay identifiers captured with `option_env!` so a
// changed deployment config triggers a rebuild, and warn when a release build
// ships without them (the page must then call `init_relay_config_js`).

use std::env;

const RELAY_VARS: [&str; 3] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
];

fn main() {
    for var in RELAY_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let missing: Vec<&str> = RELAY_VARS
        .iter()
        .copied()
        .filter(|v| env::var(v).map(|s| s.trim().is_empty()).unwrap_or(true))
        .collect();

    if env::var("PROFILE").as_deref() == Ok("release") && !missing.is_empty() {
        println!(
            "cargo:warning=Relay config not baked in (missing {}); runtime init_relay_config_js() required",
            missing.join(", ")
        );
    }
}
