//! Page root.
//!
//! Provides the [`AppContext`], installs the window-level listeners, keeps
//! the document's `lang`/`dir`/title in sync with the locale, and lays out
//! the sections.

use leptos::prelude::*;
use prime_core::SiteContent;

use crate::app::AppContext;
use crate::components::gallery::Gallery;
use crate::components::nav::NavBar;
use crate::components::scroll_top::ScrollToTop;
use crate::components::sections::{
    AboutSection, ContactSection, HeroSection, ServicesSection, SiteFooter,
};
use crate::core::events;
use crate::utils::dom;

#[component]
pub fn Site(content: SiteContent, ctx: AppContext) -> impl IntoView {
    provide_context(ctx);
    events::install(ctx);

    // Later changes are mirrored by `AppContext::set_locale`
    dom::apply_locale(ctx.locale.get_untracked());

    web_sys::console::log_1(
        &format!(
            "PRIME site ready: {} slides, locale {}",
            content.slide_count(),
            ctx.locale.get_untracked()
        )
        .into(),
    );

    let SiteContent {
        brand,
        nav,
        hero,
        gallery,
        about,
        services,
        contact,
        footer,
    } = content;

    view! {
        <NavBar brand=brand links=nav />
        <main>
            <HeroSection hero=hero />
            <Gallery gallery=gallery />
            <AboutSection about=about />
            <ServicesSection services=services />
            <ContactSection contact=contact />
        </main>
        <SiteFooter footer=footer />
        <ScrollToTop />
    }
}
