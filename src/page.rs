//! Typed handles to every element the controller touches, resolved once at
//! start-up and injected into the event handlers.

use wasm_bindgen::JsCast;
use web_sys::{css, Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::constants::{
    CONTACT_FORM_ID, CONTACT_MESSAGE_ID, CONTACT_USER_ID, HEADER_ID, NAV_CLOSE_ID, NAV_LINK_SELECTOR,
    NAV_MENU_ID, NAV_TOGGLE_ID, SCROLL_UP_ID, SECTION_SELECTOR, SUBMIT_BUTTON_SELECTOR,
};
use crate::dom_utils::{optional, query_all, required, required_as};
use crate::errors::PageError;
use crate::{debug_log, warn_log};

/// A `section[id]` and the navigation anchor that points at it.
pub struct SectionHandle {
    pub element: HtmlElement,
    pub link: Option<Element>,
}

pub struct PageHandles {
    pub nav_menu: Element,
    pub nav_toggle: Option<Element>,
    pub nav_close: Option<Element>,
    pub nav_links: Vec<Element>,
    pub header: Element,
    pub scroll_up: Element,
    pub sections: Vec<SectionHandle>,
    pub contact_form: HtmlFormElement,
    pub contact_message: Element,
    pub contact_user: HtmlInputElement,
    pub submit_button: Option<Element>,
}

impl PageHandles {
    /// Resolve all handles.  Any missing required element aborts.
    pub fn from_document(document: &Document) -> Result<Self, PageError> {
        let contact_form: HtmlFormElement = required_as(document, CONTACT_FORM_ID, "form")?;
        let submit_button = contact_form.query_selector(SUBMIT_BUTTON_SELECTOR)?;

        Ok(Self {
            nav_menu: required(document, NAV_MENU_ID)?,
            nav_toggle: optional(document, NAV_TOGGLE_ID),
            nav_close: optional(document, NAV_CLOSE_ID),
            nav_links: query_all(document, NAV_LINK_SELECTOR)?,
            header: required(document, HEADER_ID)?,
            scroll_up: required(document, SCROLL_UP_ID)?,
            sections: resolve_sections(document)?,
            contact_form,
            contact_message: required(document, CONTACT_MESSAGE_ID)?,
            contact_user: required_as(document, CONTACT_USER_ID, "input")?,
            submit_button,
        })
    }
}

fn resolve_sections(document: &Document) -> Result<Vec<SectionHandle>, PageError> {
    let mut sections = Vec::new();
    for el in query_all(document, SECTION_SELECTOR)? {
        let Ok(element) = el.dyn_into::<HtmlElement>() else { continue };
        let id = element.id();
        let link = match document.query_selector(&link_selector(&id)) {
            Ok(link) => link,
            Err(e) => {
                warn_log!("link lookup for section #{} failed: {:?}", id, e);
                None
            }
        };
        if link.is_none() {
            warn_log!("section #{} has no navigation link; it will not be highlighted", id);
        }
        sections.push(SectionHandle { element, link });
    }
    debug_log!("resolved {} page sections", sections.len());
    Ok(sections)
}

/// Selector for the menu anchor whose `href` mentions `section_id`.
pub fn link_selector(section_id: &str) -> String {
    format!(".nav__menu a[href*=\"{}\"]", css::escape(section_id))
}
