//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! The controller logic never talks to `web_sys::Element` directly; it goes
//! through the small [`ClassTarget`] / [`TextTarget`] traits below so unit
//! tests can substitute in-memory fakes for real elements.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget};

use crate::errors::PageError;

/// Anything that carries a CSS class list.
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Anything with replaceable text content.
pub trait TextTarget {
    fn set_text(&self, text: &str);
    fn text(&self) -> String;
}

impl ClassTarget for Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl TextTarget for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }
}

/// Add `class` when `on` is true, remove it otherwise.  Idempotent: class
/// lists never hold duplicates.
pub fn set_class<T: ClassTarget + ?Sized>(el: &T, class: &str, on: bool) {
    if on {
        el.add_class(class);
    } else {
        el.remove_class(class);
    }
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn required(document: &Document, id: &'static str) -> Result<Element, PageError> {
    document
        .get_element_by_id(id)
        .ok_or(PageError::MissingElement(id))
}

pub fn optional(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// Fetch a required element by id and cast it to a concrete element type.
pub fn required_as<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, PageError> {
    required(document, id)?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType { id, expected })
}

/// `querySelectorAll` collected into a `Vec` of elements.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

// ---------------------------------------------------------------------------
// Event listeners
// ---------------------------------------------------------------------------

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let cb = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Same as [`listen`] but registers a passive listener (scroll, touch).
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

// ---------------------------------------------------------------------------
// In-memory fakes shared by the unit tests of other modules
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod testing {
    use super::{ClassTarget, TextTarget};
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    pub struct FakeElement {
        pub classes: RefCell<BTreeSet<String>>,
        pub text: RefCell<String>,
    }

    impl FakeElement {
        pub fn class_count(&self) -> usize {
            self.classes.borrow().len()
        }
    }

    impl ClassTarget for FakeElement {
        fn add_class(&self, class: &str) {
            self.classes.borrow_mut().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().remove(class);
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }
    }

    impl TextTarget for FakeElement {
        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }

        fn text(&self) -> String {
            self.text.borrow().clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeElement;
    use super::*;

    #[test]
    fn set_class_adds_and_removes() {
        let el = FakeElement::default();
        set_class(&el, "active-link", true);
        assert!(el.has_class("active-link"));
        set_class(&el, "active-link", false);
        assert!(!el.has_class("active-link"));
    }

    #[test]
    fn set_class_twice_keeps_single_entry() {
        let el = FakeElement::default();
        set_class(&el, "bg-header", true);
        set_class(&el, "bg-header", true);
        assert_eq!(el.class_count(), 1);
    }
}
