pub mod events;
pub mod nav;
pub mod scroll;

use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::controller::PageController;

/// Evaluate scroll-dependent classes once so a page restored mid-scroll is
/// styled before the first scroll event arrives.
pub fn sync_scroll_state(ctrl: &PageController, window: &Window) -> Result<(), JsValue> {
    let scroll_y = window.scroll_y()?;
    scroll::on_scroll(ctrl.page(), scroll_y);
    Ok(())
}
