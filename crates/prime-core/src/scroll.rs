//! Scroll affordance math: the scroll-to-top threshold and in-page anchor
//! targets with fixed-header compensation.

use crate::config::{HEADER_OFFSET, SCROLL_TOP_THRESHOLD};

/// Whether the scroll-to-top button should be visible at `scroll_y`.
#[inline]
pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Document scroll position that puts an element just below the fixed header.
///
/// `element_top` is the element's viewport-relative top edge and `scroll_y`
/// the current page offset.
#[inline]
pub fn section_offset(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}

/// Destination of a same-page link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorTarget {
    /// `#` or `#home`: the very top of the page.
    Home,
    /// `#<id>`: the element with that id.
    Section(String),
}

impl AnchorTarget {
    /// Parses an `href`. Returns `None` for links that are not same-page
    /// anchors.
    pub fn parse(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        match id {
            "" | "home" => Some(AnchorTarget::Home),
            id => Some(AnchorTarget::Section(id.to_string())),
        }
    }
}
