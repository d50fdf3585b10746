//! Event wiring.  Each `setup_*` attaches one group of listeners to the
//! handles held by the controller.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent, Window};

use crate::controller::PageController;
use crate::dom_utils::{listen, listen_passive};
use crate::messages::Message;
use crate::ui::{nav, scroll};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Attach every page listener.  Call once after the controller is built.
pub fn setup_page_event_handlers(ctrl: &Rc<PageController>, window: &Window) -> Result<(), JsValue> {
    setup_nav_handlers(ctrl)?;
    setup_scroll_handler(ctrl, window)?;
    setup_contact_handler(ctrl)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual handlers
// ---------------------------------------------------------------------------

fn setup_nav_handlers(ctrl: &Rc<PageController>) -> Result<(), JsValue> {
    let page = ctrl.page();

    if let Some(toggle) = &page.nav_toggle {
        let ctrl = Rc::clone(ctrl);
        listen(toggle, "click", move |_e: MouseEvent| {
            nav::open_menu(&ctrl.page().nav_menu);
        })?;
    }

    if let Some(close) = &page.nav_close {
        let ctrl = Rc::clone(ctrl);
        listen(close, "click", move |_e: MouseEvent| {
            nav::close_menu(&ctrl.page().nav_menu);
        })?;
    }

    for link in &page.nav_links {
        let ctrl = Rc::clone(ctrl);
        listen(link, "click", move |_e: MouseEvent| {
            nav::close_menu(&ctrl.page().nav_menu);
        })?;
    }
    Ok(())
}

fn setup_scroll_handler(ctrl: &Rc<PageController>, window: &Window) -> Result<(), JsValue> {
    let ctrl = Rc::clone(ctrl);
    let win = window.clone();
    listen_passive(window, "scroll", move |_e: Event| {
        scroll::on_scroll(ctrl.page(), win.scroll_y().unwrap_or(0.0));
    })
}

/// <form id="contact-form">
fn setup_contact_handler(ctrl: &Rc<PageController>) -> Result<(), JsValue> {
    let form = ctrl.page().contact_form.clone();
    let ctrl = Rc::clone(ctrl);
    listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        let email = ctrl.page().contact_user.value();
        ctrl.dispatch(Message::ContactSubmitted { email });
    })
}
