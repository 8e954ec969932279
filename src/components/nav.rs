//! Navigation bar with mobile menu and language toggle.
//!
//! The mobile menu panel and its trigger button share one
//! [`MenuState`](prime_core::MenuState), so their `active` classes never
//! disagree. The language toggle sits outside the nav container; clicks on
//! either never dismiss the menu (see [`crate::core::events`]).

use leptos::prelude::*;
use leptos_icons::Icon;
use prime_core::content::NavLink;
use prime_core::Localized;

use crate::app::AppContext;
use crate::components::anchor::AnchorLink;
use crate::components::icons as ic;
use crate::components::text::Tr;
use crate::config::ids;

stylance::import_crate_style!(css, "src/components/nav.module.css");

/// Appends the active modifier when `active` is set.
fn with_active(base: &str, active: bool) -> String {
    if active {
        format!("{} {}", base, css::active)
    } else {
        base.to_string()
    }
}

#[component]
pub fn NavBar(brand: Localized, links: Vec<NavLink>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let menu_open = Signal::derive(move || ctx.menu.with(|m| m.is_open()));

    let toggle_menu = move |_: leptos::ev::MouseEvent| ctx.toggle_menu();
    let close_menu = Callback::new(move |_: ()| ctx.close_menu());

    let desktop_links = links
        .iter()
        .cloned()
        .map(|link| {
            view! {
                <li>
                    <AnchorLink href=link.href class=css::navLink>
                        <Tr text=link.label />
                    </AnchorLink>
                </li>
            }
        })
        .collect_view();

    let mobile_links = links
        .into_iter()
        .map(|link| {
            view! {
                <AnchorLink href=link.href class=css::mobileLink on_navigate=close_menu>
                    <Tr text=link.label />
                </AnchorLink>
            }
        })
        .collect_view();

    view! {
        <header class=css::header>
            <nav id=ids::NAV_CONTAINER class=css::navContainer>
                <AnchorLink href="#" class=css::logo>
                    <Tr text=brand />
                </AnchorLink>

                <ul class=css::navLinks>{desktop_links}</ul>

                <button
                    class=move || with_active(css::menuToggle, menu_open.get())
                    on:click=toggle_menu
                    aria-label="Menu"
                >
                    {move || if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>

                <div
                    id=ids::MOBILE_MENU
                    class=move || with_active(css::mobileMenu, menu_open.get())
                >
                    {mobile_links}
                </div>
            </nav>

            <LanguageToggle />
        </header>
    }
}

/// Switches between English and Arabic; the choice is remembered by
/// [`AppContext::toggle_locale`].
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_click = move |_: leptos::ev::MouseEvent| {
        ctx.toggle_locale();
    };

    view! {
        <button id=ids::LANGUAGE_TOGGLE class=css::languageToggle on:click=on_click>
            <Icon icon=ic::LANGUAGE />
            <span>{move || ctx.locale.get().toggle_label()}</span>
        </button>
    }
}
