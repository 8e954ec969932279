//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Missing elements or
//! unavailable APIs are silent no-ops.

use prime_core::scroll::section_offset;
use prime_core::{AnchorTarget, Locale};
use web_sys::{Document, Element, Node, ScrollBehavior, ScrollToOptions, Storage, Window};

/// Get the browser window object.
///
/// Always `None` off `wasm32`, so native tests can drive code that touches
/// the DOM.
#[inline]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Look up an element by id.
#[inline]
pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Current vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Whether the element with `id` contains `target` (or is `target`).
///
/// Returns `None` if the element does not exist.
pub fn contains_target(id: &str, target: &Node) -> Option<bool> {
    let element = element_by_id(id)?;
    Some(element.contains(Some(target)))
}

// =============================================================================
// Scrolling
// =============================================================================

/// Animated scroll to an absolute vertical position.
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Viewport-relative top edge of the element with `id`.
pub fn element_top(id: &str) -> Option<f64> {
    element_by_id(id).map(|el| el.get_bounding_client_rect().top())
}

/// Smooth-scroll to a same-page anchor, leaving room for the fixed header.
///
/// A section that does not exist is ignored.
pub fn scroll_to_anchor(target: &AnchorTarget) {
    match target {
        AnchorTarget::Home => smooth_scroll_to(0.0),
        AnchorTarget::Section(id) => {
            if let Some(top) = element_top(id) {
                smooth_scroll_to(section_offset(top, scroll_y()));
            }
        }
    }
}

/// Jump to the top of the page without animation.
pub fn reset_scroll() {
    let Some(window) = window() else {
        return;
    };
    window.scroll_to_with_x_and_y(0.0, 0.0);
    if let Some(document) = window.document() {
        if let Some(root) = document.document_element() {
            root.set_scroll_top(0);
        }
        if let Some(body) = document.body() {
            body.set_scroll_top(0);
        }
    }
}

/// Stop the browser from restoring the previous scroll position on reload.
pub fn disable_scroll_restoration() {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
    }
}

// =============================================================================
// Locale
// =============================================================================

/// Apply `lang`/`dir` to `<html>` and `<body>` and update the document title.
pub fn apply_locale(locale: Locale) {
    let Some(document) = document() else {
        return;
    };
    let lang = locale.token();
    let dir = locale.direction().as_attr();

    let body = document.body().map(Element::from);
    for element in [document.document_element(), body].into_iter().flatten() {
        let _ = element.set_attribute("lang", lang);
        let _ = element.set_attribute("dir", dir);
    }
    document.set_title(locale.title());
}
