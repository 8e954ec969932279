//! Gallery carousel.
//!
//! The slide track is translated by whole slide widths; under RTL the track
//! is laid out mirrored, so the offset sign flips with the locale. Every
//! slide or direction change restarts the visible slide's entrance
//! animation by clearing the inline `animation` and re-applying it after a
//! short delay. Pending restarts are never cancelled; an overlap only
//! replays the fade.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use prime_core::content::{Gallery as GalleryContent, Slide};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::text::Tr;
use crate::config::{ANIMATION_RESTART_DELAY_MS, SLIDE_ENTRANCE_ANIMATION, ids};

stylance::import_crate_style!(css, "src/components/gallery.module.css");

/// Horizontal screen coordinate of the first changed touch point.
fn changed_touch_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| f64::from(t.screen_x()))
}

#[component]
pub fn Gallery(gallery: GalleryContent) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.gallery;
    let locale = ctx.locale;

    // Replay the entrance animation whenever the slide or direction changes
    Effect::new(move |_| {
        state.carousel.track();
        locale.track();
        state.animation_live.set(false);
        Timeout::new(ANIMATION_RESTART_DELAY_MS, move || {
            let _ = state.animation_live.try_set(true);
        })
        .forget();
    });

    let transform = move || state.carousel.with(|c| c.transform(locale.get()));
    let total = Memo::new(move |_| state.carousel.with(|c| c.total()));

    let on_touch_start = move |ev: web_sys::TouchEvent| {
        if let Some(x) = changed_touch_x(&ev) {
            state.begin_swipe(x);
        }
    };
    let on_touch_end = move |ev: web_sys::TouchEvent| {
        if let Some(x) = changed_touch_x(&ev) {
            ctx.end_swipe(x);
        }
    };

    let slides = gallery
        .slides
        .into_iter()
        .enumerate()
        .map(|(position, slide)| view! { <GallerySlide position=position slide=slide /> })
        .collect_view();

    // Dots are rebuilt only when the slide count changes
    let dots = move || {
        (0..total.get())
            .map(|position| {
                let class = move || {
                    if state.carousel.with(|c| c.is_active(position)) {
                        format!("{} {}", css::dot, css::active)
                    } else {
                        css::dot.to_string()
                    }
                };
                let on_click = move |_: leptos::ev::MouseEvent| {
                    if let Err(err) = state.go_to_slide(position) {
                        web_sys::console::warn_1(&err.to_string().into());
                    }
                };
                view! { <span class=class on:click=on_click></span> }
            })
            .collect_view()
    };

    view! {
        <section id="gallery" class=css::section>
            <h2 class=css::heading><Tr text=gallery.heading /></h2>

            <div
                class=css::container
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
            >
                <div id=ids::GALLERY_SLIDER class=css::slider style:transform=transform>
                    {slides}
                </div>

                <button
                    class=css::prev
                    on:click=move |_| state.change_slide(-1)
                    aria-label="Previous slide"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <button
                    class=css::next
                    on:click=move |_| state.change_slide(1)
                    aria-label="Next slide"
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>

            <div id=ids::GALLERY_DOTS class=css::dots>{dots}</div>
        </section>
    }
}

/// One slide: image plus caption overlay.
#[component]
fn GallerySlide(position: usize, slide: Slide) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.gallery;
    let locale = ctx.locale;

    let animation = move || {
        if !state.carousel.with(|c| c.is_active(position)) {
            return String::new();
        }
        if state.animation_live.get() {
            format!("animation: {}", SLIDE_ENTRANCE_ANIMATION)
        } else {
            "animation: none".to_string()
        }
    };

    let alt = slide.title.clone();
    let alt = move || alt.get(locale.get()).to_string();

    view! {
        <div class=css::slide>
            <img class=css::image src=slide.image alt=alt />
            <div class=css::content style=animation>
                <h3><Tr text=slide.title /></h3>
                <p><Tr text=slide.caption /></p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    const GALLERY_CSS: &str = include_str!("gallery.module.css");

    #[test]
    fn test_arrows_follow_reading_direction() {
        assert!(GALLERY_CSS.contains("inset-inline-start: 1rem"));
        assert!(GALLERY_CSS.contains("inset-inline-end: 1rem"));
        assert!(!GALLERY_CSS.contains("left: 1rem"));
        assert!(!GALLERY_CSS.contains("right: 1rem"));
    }
}
