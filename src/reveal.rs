//! Reveal-on-scroll animations via the ScrollReveal library.
//!
//! Registration is purely declarative: we build one instance with the global
//! defaults and hand it a list of selector groups.  Detecting elements and
//! animating them is left entirely to the library.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::constants::{REVEAL_DELAY_MS, REVEAL_DISTANCE, REVEAL_DURATION_MS};
use crate::errors::js_error_text;
use crate::{debug_log, warn_log};

#[wasm_bindgen]
extern "C" {
    type ScrollRevealInstance;

    #[wasm_bindgen(catch, js_name = ScrollReveal)]
    fn scroll_reveal(options: &JsValue) -> Result<ScrollRevealInstance, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn reveal(this: &ScrollRevealInstance, selector: &str, options: &JsValue) -> Result<(), JsValue>;
}

/// Edge the element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealDefaults {
    pub origin: Origin,
    pub distance: String,
    pub duration: u32,
    pub delay: u32,
}

impl Default for RevealDefaults {
    fn default() -> Self {
        Self {
            origin: Origin::Top,
            distance: REVEAL_DISTANCE.to_string(),
            duration: REVEAL_DURATION_MS,
            delay: REVEAL_DELAY_MS,
        }
    }
}

/// Per-group overrides.  Unset fields are not sent to the library so its
/// instance defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevealOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    /// Milliseconds between staggered siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    pub selectors: &'static str,
    pub overrides: RevealOverrides,
}

impl RevealGroup {
    fn new(selectors: &'static str, overrides: RevealOverrides) -> Self {
        Self { selectors, overrides }
    }
}

/// The landing page's reveal choreography.
pub fn default_reveal_groups() -> Vec<RevealGroup> {
    vec![
        RevealGroup::new(
            ".home__data, .footer__container, .footer__group",
            RevealOverrides::default(),
        ),
        RevealGroup::new(
            ".home__img",
            RevealOverrides {
                delay: Some(700),
                origin: Some(Origin::Bottom),
                ..Default::default()
            },
        ),
        RevealGroup::new(
            ".logos__img, .program__card, .pricing__card",
            RevealOverrides {
                interval: Some(100),
                ..Default::default()
            },
        ),
        RevealGroup::new(
            ".choose__img, .calculate__content",
            RevealOverrides {
                origin: Some(Origin::Left),
                ..Default::default()
            },
        ),
        RevealGroup::new(
            ".choose__content, .calculate__img",
            RevealOverrides {
                origin: Some(Origin::Right),
                ..Default::default()
            },
        ),
    ]
}

/// Create the ScrollReveal instance and register every group.  A missing
/// library only costs the animations, so failures are logged, not raised.
pub fn register_reveal_animations(defaults: &RevealDefaults, groups: &[RevealGroup]) {
    let options = match serde_wasm_bindgen::to_value(defaults) {
        Ok(v) => v,
        Err(e) => {
            warn_log!("reveal defaults not serialisable: {}", e);
            return;
        }
    };
    let sr = match scroll_reveal(&options) {
        Ok(sr) => sr,
        Err(e) => {
            warn_log!("ScrollReveal unavailable: {}", js_error_text(&e));
            return;
        }
    };

    for group in groups {
        let overrides = match serde_wasm_bindgen::to_value(&group.overrides) {
            Ok(v) => v,
            Err(e) => {
                warn_log!("reveal overrides for '{}' not serialisable: {}", group.selectors, e);
                continue;
            }
        };
        if let Err(e) = sr.reveal(group.selectors, &overrides) {
            warn_log!("reveal('{}') failed: {}", group.selectors, js_error_text(&e));
        }
    }
    debug_log!("registered {} reveal groups", groups.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_page_choreography() {
        assert_eq!(
            serde_json::to_value(RevealDefaults::default()).unwrap(),
            json!({"origin": "top", "distance": "60px", "duration": 2500, "delay": 400})
        );
    }

    #[test]
    fn unset_overrides_are_omitted() {
        let groups = default_reveal_groups();
        assert_eq!(groups.len(), 5);
        assert_eq!(serde_json::to_value(&groups[0].overrides).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(&groups[1].overrides).unwrap(),
            json!({"delay": 700, "origin": "bottom"})
        );
        assert_eq!(
            serde_json::to_value(&groups[2].overrides).unwrap(),
            json!({"interval": 100})
        );
    }

    #[test]
    fn side_groups_slide_in_from_opposite_edges() {
        let groups = default_reveal_groups();
        assert_eq!(groups[3].selectors, ".choose__img, .calculate__content");
        assert_eq!(groups[3].overrides.origin, Some(Origin::Left));
        assert_eq!(groups[4].selectors, ".choose__content, .calculate__img");
        assert_eq!(groups[4].overrides.origin, Some(Origin::Right));
    }
}
