//! The page interaction controller: owns the injected element handles and the
//! contact form state, and routes messages through the reducer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::command_executors;
use crate::messages::Message;
use crate::page::PageHandles;
use crate::state::{ContactState, RequestState, StatusMessage};
use crate::update::update;

pub struct PageController {
    page: PageHandles,
    state: RefCell<ContactState>,
    // Dropping a `Timeout` cancels it, so replacing this slot cancels the
    // previous status' clear.
    pending_clear: RefCell<Option<Timeout>>,
}

impl PageController {
    pub fn new(page: PageHandles) -> Rc<Self> {
        Rc::new(Self {
            page,
            state: RefCell::new(ContactState::new()),
            pending_clear: RefCell::new(None),
        })
    }

    pub fn page(&self) -> &PageHandles {
        &self.page
    }

    /// Run `msg` through the reducer, then execute the resulting commands.
    /// The state borrow is released before any command runs so commands may
    /// dispatch again.
    pub fn dispatch(self: &Rc<Self>, msg: Message) {
        let commands = {
            let mut state = self.state.borrow_mut();
            update(&mut state, msg)
        };
        for cmd in commands {
            command_executors::execute(self, cmd);
        }
    }

    /// Arm a new auto-clear timer, cancelling the previous one.
    pub(crate) fn replace_pending_clear(&self, timeout: Timeout) {
        *self.pending_clear.borrow_mut() = Some(timeout);
    }

    pub fn request_state(&self) -> RequestState {
        self.state.borrow().request
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.state.borrow().status.clone()
    }
}
