//! Scroll-driven class toggling: header background, scroll-up button and the
//! active navigation link.
//!
//! The decision functions are pure so they can be tested without a browser;
//! the `apply_*` helpers push the decision into anything implementing
//! [`ClassTarget`].

use web_sys::{Element, HtmlElement};

use crate::constants::{
    ACTIVE_LINK_CLASS, HEADER_SCROLLED_CLASS, HEADER_SCROLL_THRESHOLD, SCROLL_UP_THRESHOLD,
    SCROLL_UP_VISIBLE_CLASS, SECTION_HEADER_OFFSET,
};
use crate::dom_utils::{set_class, ClassTarget};
use crate::page::PageHandles;

/// Vertical extent of one `section[id]`, as read from the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }

    /// Read the current layout of a section element.  `None` when the
    /// element has no id.
    pub fn read(el: &HtmlElement) -> Option<Self> {
        let id = el.get_attribute("id").filter(|id| !id.is_empty())?;
        Some(Self::new(
            id,
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }

    /// Section top corrected for the fixed header.
    pub fn top(&self) -> f64 {
        self.offset_top - SECTION_HEADER_OFFSET
    }

    pub fn bottom(&self) -> f64 {
        self.top() + self.height
    }

    /// Half-open range `[top, bottom)` so adjacent sections never both match.
    pub fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.top() && scroll_y < self.bottom()
    }
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= HEADER_SCROLL_THRESHOLD
}

pub fn scroll_up_is_visible(scroll_y: f64) -> bool {
    scroll_y >= SCROLL_UP_THRESHOLD
}

/// Per-section active flag for the given scroll offset, in document order.
pub fn active_section_states(sections: &[SectionBounds], scroll_y: f64) -> Vec<(&str, bool)> {
    sections
        .iter()
        .map(|s| (s.id.as_str(), s.contains(scroll_y)))
        .collect()
}

pub fn apply_header_state<T: ClassTarget + ?Sized>(header: &T, scroll_y: f64) {
    set_class(header, HEADER_SCROLLED_CLASS, header_is_scrolled(scroll_y));
}

pub fn apply_scroll_up_state<T: ClassTarget + ?Sized>(button: &T, scroll_y: f64) {
    set_class(button, SCROLL_UP_VISIBLE_CLASS, scroll_up_is_visible(scroll_y));
}

/// Toggle the active class on `links[i]` from the state of `sections[i]`.
pub fn apply_active_links<L: ClassTarget + ?Sized>(
    sections: &[SectionBounds],
    links: &[&L],
    scroll_y: f64,
) {
    debug_assert_eq!(sections.len(), links.len());
    for ((_, active), link) in active_section_states(sections, scroll_y).into_iter().zip(links) {
        set_class(*link, ACTIVE_LINK_CLASS, active);
    }
}

/// Re-evaluate every scroll-dependent class on the page.
pub fn on_scroll(page: &PageHandles, scroll_y: f64) {
    apply_header_state(&page.header, scroll_y);
    apply_scroll_up_state(&page.scroll_up, scroll_y);

    let (sections, links): (Vec<SectionBounds>, Vec<&Element>) = page
        .sections
        .iter()
        .filter_map(|section| {
            let link = section.link.as_ref()?;
            Some((SectionBounds::read(&section.element)?, link))
        })
        .unzip();
    apply_active_links(&sections, &links, scroll_y);
}
