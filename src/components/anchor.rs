//! Same-page links.
//!
//! `#`/`#home` scroll to the top; `#section` scrolls to the section minus the
//! fixed header height. Both use smooth scrolling instead of the browser's
//! jump-to-anchor.

use leptos::prelude::*;
use prime_core::AnchorTarget;

use crate::utils::dom;

#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    /// Runs after the scroll starts (used to close the mobile menu).
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let target = AnchorTarget::parse(&href);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(target) = target.as_ref() else {
            return;
        };
        ev.prevent_default();
        dom::scroll_to_anchor(target);
        if let Some(callback) = on_navigate {
            callback.run(());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
