//! Page-level event dispatch table.
//!
//! Window-wide listeners are declared in [`PAGE_LISTENERS`] and installed
//! once, in table order, when the site mounts. Element-scoped events
//! (gallery touches, dot and button clicks, anchor links) are bound on the
//! elements themselves by their components.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, Node};

use crate::app::AppContext;
use crate::config::ids;
use crate::utils::dom;

/// Handler invoked with the application context and the raw event.
pub type PageHandler = fn(&AppContext, &Event);

/// Window listeners in installation order.
pub const PAGE_LISTENERS: &[(&str, PageHandler)] = &[
    ("scroll", on_scroll),
    ("resize", on_resize),
    ("click", on_click),
    ("beforeunload", on_before_unload),
];

/// Registers every entry of [`PAGE_LISTENERS`] on `window`.
///
/// The closures live for the rest of the page.
pub fn install(ctx: AppContext) {
    let Some(window) = dom::window() else {
        return;
    };

    for &(kind, handler) in PAGE_LISTENERS {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            handler(&ctx, &event);
        }) as Box<dyn Fn(Event)>);

        if window
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_err()
        {
            web_sys::console::warn_1(&format!("Failed to listen for {kind} events").into());
        }

        closure.forget();
    }
}

fn on_scroll(ctx: &AppContext, _: &Event) {
    ctx.record_scroll(dom::scroll_y());
}

fn on_resize(ctx: &AppContext, _: &Event) {
    if let Some(width) = dom::viewport_width() {
        ctx.dismiss_menu_on_resize(width);
    }
}

/// Closes the mobile menu when a click lands outside the navigation and the
/// language toggle. Does nothing if either element is missing.
fn on_click(ctx: &AppContext, event: &Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return;
    };
    let inside_nav = dom::contains_target(ids::NAV_CONTAINER, &target);
    let inside_toggle = dom::contains_target(ids::LANGUAGE_TOGGLE, &target);
    if let (Some(inside_nav), Some(inside_toggle)) = (inside_nav, inside_toggle) {
        ctx.dismiss_menu_on_click(inside_nav, inside_toggle);
    }
}

fn on_before_unload(_: &AppContext, _: &Event) {
    dom::reset_scroll();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_order_is_stable() {
        let kinds: Vec<&str> = PAGE_LISTENERS.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec!["scroll", "resize", "click", "beforeunload"]);
    }
}
