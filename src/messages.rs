// src/messages.rs
//
// Events the contact form reacts to, and the side effects the reducer asks
// the controller to perform.
//
use crate::state::StatusMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The form was submitted with the current value of the e-mail field.
    ContactSubmitted { email: String },

    /// The relay accepted the form.
    RelaySucceeded,

    /// The relay call failed; `detail` is shown to the user verbatim.
    RelayFailed { detail: String },

    /// The auto-clear timer of status `generation` fired.
    StatusExpired { generation: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hand the form to the e-mail relay.
    SendForm,

    /// Paint a status line under the form.
    ShowStatus(StatusMessage),

    /// Empty the status line (tone class is kept).
    ClearStatusText,

    /// Arm the one-shot auto-clear for status `generation`, cancelling any
    /// previously armed one.
    ScheduleStatusClear { generation: u32, delay_ms: u32 },

    /// Reset the e-mail input.
    ClearInput,

    /// Enable / disable the submit control while a request is in flight.
    SetSubmitEnabled(bool),

    /// Blocking `window.alert`.
    Alert(String),
}
