//! Static content sections.

use leptos::prelude::*;
use leptos_icons::Icon;
use prime_core::content::{About, Contact, Footer, Hero, Services};

use crate::components::anchor::AnchorLink;
use crate::components::icons as ic;
use crate::components::text::Tr;

stylance::import_crate_style!(css, "src/components/sections.module.css");

#[component]
pub fn HeroSection(hero: Hero) -> impl IntoView {
    view! {
        <section id="home" class=css::hero>
            <h1 class=css::heroTitle><Tr text=hero.title /></h1>
            <p class=css::heroSubtitle><Tr text=hero.subtitle /></p>
            <AnchorLink href=hero.cta_href class=css::cta>
                <Tr text=hero.cta_label />
            </AnchorLink>
        </section>
    }
}

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    let paragraphs = about
        .paragraphs
        .into_iter()
        .map(|text| view! { <p><Tr text=text /></p> })
        .collect_view();

    view! {
        <section id="about" class=css::section>
            <h2 class=css::heading><Tr text=about.heading /></h2>
            <div class=css::prose>{paragraphs}</div>
        </section>
    }
}

#[component]
pub fn ServicesSection(services: Services) -> impl IntoView {
    let cards = services
        .items
        .into_iter()
        .map(|item| {
            view! {
                <article class=css::card>
                    <h3><Tr text=item.title /></h3>
                    <p><Tr text=item.description /></p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="services" class=css::sectionAlt>
            <h2 class=css::heading><Tr text=services.heading /></h2>
            <div class=css::cards>{cards}</div>
        </section>
    }
}

#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
    let tel = format!("tel:{}", contact.phone.replace(' ', ""));
    let mailto = format!("mailto:{}", contact.email);

    view! {
        <section id="contact" class=css::section>
            <h2 class=css::heading><Tr text=contact.heading /></h2>
            <p class=css::prose><Tr text=contact.intro /></p>
            <ul class=css::contactList>
                <li>
                    <Icon icon=ic::PHONE />
                    <a href=tel dir="ltr">{contact.phone}</a>
                </li>
                <li>
                    <Icon icon=ic::MAIL />
                    <a href=mailto>{contact.email}</a>
                </li>
                <li>
                    <Icon icon=ic::LOCATION />
                    <span><Tr text=contact.location /></span>
                </li>
            </ul>
        </section>
    }
}

#[component]
pub fn SiteFooter(footer: Footer) -> impl IntoView {
    view! {
        <footer class=css::footer>
            <Tr text=footer.text />
        </footer>
    }
}
