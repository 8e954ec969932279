//! Scroll-to-top button, shown once the page is scrolled past a threshold.

use leptos::prelude::*;
use leptos_icons::Icon;
use prime_core::scroll::scroll_to_top_visible;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ids;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/scroll_top.module.css");

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let visible = Memo::new(move |_| scroll_to_top_visible(ctx.scroll_y.get()));

    let class = move || {
        if visible.get() {
            format!("{} {}", css::button, css::visible)
        } else {
            css::button.to_string()
        }
    };

    view! {
        <button
            id=ids::SCROLL_TO_TOP
            class=class
            on:click=move |_| dom::smooth_scroll_to(0.0)
            aria-label="Scroll to top"
        >
            <Icon icon=ic::ARROW_UP />
        </button>
    }
}
