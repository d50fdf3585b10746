// src/update.rs
//
// Pure reducer for the contact form.  No DOM access happens here: every
// effect is returned as a `Command` and executed by the controller.
//
use crate::constants::{MSG_EMAIL_REQUIRED, MSG_REGISTERED, MSG_RELAY_FAILED, STATUS_CLEAR_DELAY_MS};
use crate::messages::{Command, Message};
use crate::state::{ContactState, RequestState, StatusMessage};

pub fn update(state: &mut ContactState, msg: Message) -> Vec<Command> {
    match msg {
        Message::ContactSubmitted { email } => {
            if state.request == RequestState::Sending {
                return Vec::new();
            }
            if email.is_empty() {
                return show_status(state, StatusMessage::error(MSG_EMAIL_REQUIRED));
            }
            state.request = RequestState::Sending;
            vec![Command::SetSubmitEnabled(false), Command::SendForm]
        }

        Message::RelaySucceeded => {
            state.request = RequestState::Idle;
            let mut commands = vec![Command::SetSubmitEnabled(true)];
            commands.extend(show_status(state, StatusMessage::success(MSG_REGISTERED)));
            commands.push(Command::ClearInput);
            commands
        }

        Message::RelayFailed { detail } => {
            state.request = RequestState::Idle;
            vec![
                Command::SetSubmitEnabled(true),
                Command::Alert(failure_text(&detail)),
            ]
        }

        Message::StatusExpired { generation } => {
            if generation != state.status_generation || state.status.is_none() {
                return Vec::new();
            }
            state.status = None;
            vec![Command::ClearStatusText]
        }
    }
}

fn show_status(state: &mut ContactState, status: StatusMessage) -> Vec<Command> {
    let generation = state.set_status(status.clone());
    vec![
        Command::ShowStatus(status),
        Command::ScheduleStatusClear {
            generation,
            delay_ms: STATUS_CLEAR_DELAY_MS,
        },
    ]
}

/// Alert text for a failed relay call.
pub fn failure_text(detail: &str) -> String {
    if detail.is_empty() {
        MSG_RELAY_FAILED.to_string()
    } else {
        format!("{} {}", MSG_RELAY_FAILED, detail)
    }
}
