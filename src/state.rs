//! Contact form state.  Everything else on the page is stateless and derived
//! from the DOM on each event.

use crate::constants::{STATUS_ERROR_CLASS, STATUS_SUCCESS_CLASS};

/// Whether a relay request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Error,
    Success,
}

impl StatusTone {
    /// CSS class painting the status line.
    pub fn class(self) -> &'static str {
        match self {
            StatusTone::Error => STATUS_ERROR_CLASS,
            StatusTone::Success => STATUS_SUCCESS_CLASS,
        }
    }

    pub fn opposite(self) -> StatusTone {
        match self {
            StatusTone::Error => StatusTone::Success,
            StatusTone::Success => StatusTone::Error,
        }
    }
}

/// Transient line shown under the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tone: StatusTone::Error,
        }
    }

    pub fn success(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tone: StatusTone::Success,
        }
    }
}

#[derive(Debug, Default)]
pub struct ContactState {
    pub request: RequestState,
    pub status: Option<StatusMessage>,
    // Bumped for every new status; a clear timer only applies to its own.
    pub status_generation: u32,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new status message and return its generation.
    pub fn set_status(&mut self, status: StatusMessage) -> u32 {
        self.status_generation = self.status_generation.wrapping_add(1);
        self.status = Some(status);
        self.status_generation
    }
}
