use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

use crate::controller::PageController;
use crate::dom_utils::{set_class, ClassTarget, TextTarget};
use crate::errors::RelayError;
use crate::messages::{Command, Message};
use crate::network::{self, relay};
use crate::state::StatusMessage;
use crate::{debug_log, warn_log};

pub fn execute(ctrl: &Rc<PageController>, cmd: Command) {
    match cmd {
        Command::SendForm => send_form(Rc::clone(ctrl)),
        Command::ShowStatus(status) => render_status(&ctrl.page().contact_message, &status),
        Command::ClearStatusText => ctrl.page().contact_message.set_text(""),
        Command::ScheduleStatusClear { generation, delay_ms } => {
            let weak = Rc::downgrade(ctrl);
            let timeout = Timeout::new(delay_ms, move || {
                if let Some(ctrl) = weak.upgrade() {
                    ctrl.dispatch(Message::StatusExpired { generation });
                }
            });
            ctrl.replace_pending_clear(timeout);
        }
        Command::ClearInput => ctrl.page().contact_user.set_value(""),
        Command::SetSubmitEnabled(enabled) => {
            if let Some(button) = &ctrl.page().submit_button {
                let result = if enabled {
                    button.remove_attribute("disabled")
                } else {
                    button.set_attribute("disabled", "")
                };
                if let Err(e) = result {
                    warn_log!("Failed to toggle submit button: {:?}", e);
                }
            }
        }
        Command::Alert(text) => {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&text);
            }
        }
    }
}

/// Paint `status` on the message line; the two tone classes are exclusive.
pub fn render_status<T: ClassTarget + TextTarget + ?Sized>(target: &T, status: &StatusMessage) {
    set_class(target, status.tone.opposite().class(), false);
    set_class(target, status.tone.class(), true);
    target.set_text(&status.text);
}

fn send_form(ctrl: Rc<PageController>) {
    let Some(config) = network::relay_config() else {
        web_sys::console::error_1(&"Contact form submitted but the relay is not configured".into());
        ctrl.dispatch(Message::RelayFailed {
            detail: RelayError::NotConfigured.to_string(),
        });
        return;
    };

    spawn_local(async move {
        let msg = match relay::send_form(&config).await {
            Ok(()) => {
                debug_log!("Contact form relayed via service {}", config.service_id);
                Message::RelaySucceeded
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to relay contact form: {}", e).into());
                Message::RelayFailed { detail: e.to_string() }
            }
        };
        ctrl.dispatch(msg);
    });
}
