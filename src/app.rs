//! Root application module.
//!
//! Contains the main App component, AppContext definition, GalleryState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use prime_core::{Carousel, CarouselError, Locale, MenuState, SiteContent, SwipeTracker};

use crate::components::Site;
use crate::config::SITE_CONTENT;
use crate::core::error::StartupError;
use crate::core::preference;
use crate::utils::dom;

// ============================================================================
// GalleryState
// ============================================================================

/// Carousel state managed with Leptos signals.
///
/// The slide index lives in a single [`Carousel`]; the swipe sample is kept
/// in a non-reactive [`StoredValue`] because nothing renders from it.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct GalleryState {
    /// Current slide and slide count.
    pub carousel: RwSignal<Carousel>,
    /// Touch start sample for swipe recognition.
    pub swipe: StoredValue<SwipeTracker>,
    /// `false` while the visible slide's entrance animation is being reset.
    pub animation_live: RwSignal<bool>,
}

impl GalleryState {
    pub fn new(carousel: Carousel) -> Self {
        Self {
            carousel: RwSignal::new(carousel),
            swipe: StoredValue::new(SwipeTracker::new()),
            animation_live: RwSignal::new(true),
        }
    }

    /// Steps by `direction` slides with wrap-around.
    pub fn change_slide(&self, direction: i32) {
        self.carousel.update(|c| c.change_slide(direction));
    }

    /// Jumps to `target`. Out-of-range targets leave the state untouched.
    pub fn go_to_slide(&self, target: usize) -> Result<(), CarouselError> {
        let mut carousel = self.carousel.get_untracked();
        carousel.go_to_slide(target)?;
        self.carousel.set(carousel);
        Ok(())
    }

    pub fn begin_swipe(&self, x: f64) {
        self.swipe.update_value(|t| t.begin(x));
    }

    /// Ends a touch at `x` and applies the resulting slide change, if any.
    pub fn end_swipe(&self, x: f64, locale: Locale) {
        let delta = self
            .swipe
            .try_update_value(|t| t.finish(x, locale))
            .flatten();
        if let Some(delta) = delta {
            self.change_slide(delta);
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. Also handed to the page-level event
/// handlers in [`crate::core::events`].
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Gallery carousel and gesture state.
    pub gallery: GalleryState,

    /// Active language and reading direction.
    pub locale: RwSignal<Locale>,

    /// Mobile navigation menu state.
    pub menu: RwSignal<MenuState>,

    /// Last observed vertical scroll offset.
    pub scroll_y: RwSignal<f64>,
}

impl AppContext {
    /// Creates the context for a gallery of `slide_count` slides.
    pub fn new(slide_count: usize, locale: Locale) -> Result<Self, CarouselError> {
        Ok(Self {
            gallery: GalleryState::new(Carousel::new(slide_count)?),
            locale: RwSignal::new(locale),
            menu: RwSignal::new(MenuState::new()),
            scroll_y: RwSignal::new(0.0),
        })
    }

    /// Sets the locale and mirrors it onto the document (`lang`, `dir`,
    /// title). Does not touch the stored preference.
    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        dom::apply_locale(locale);
    }

    /// Switches to the other locale, persists it, and returns it.
    ///
    /// A failed save is logged; the switch still happens.
    pub fn toggle_locale(&self) -> Locale {
        let next = self.locale.get_untracked().toggled();
        self.set_locale(next);
        if let Err(err) = preference::save_locale(next) {
            leptos::logging::warn!("Language preference not saved: {}", err);
        }
        next
    }

    pub fn record_scroll(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    pub fn end_swipe(&self, x: f64) {
        self.gallery.end_swipe(x, self.locale.get_untracked());
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|m| m.toggle());
    }

    pub fn close_menu(&self) {
        if self.menu.with_untracked(|m| m.is_open()) {
            self.menu.update(|m| m.close());
        }
    }

    /// Closes the menu for a click outside the nav and language toggle.
    pub fn dismiss_menu_on_click(&self, inside_nav: bool, inside_language_toggle: bool) {
        let mut menu = self.menu.get_untracked();
        if menu.on_outside_click(inside_nav, inside_language_toggle) {
            self.menu.set(menu);
        }
    }

    /// Closes the menu when the viewport grows into the desktop layout.
    pub fn dismiss_menu_on_resize(&self, viewport_width: f64) {
        let mut menu = self.menu.get_untracked();
        if menu.on_resize(viewport_width) {
            self.menu.set(menu);
        }
    }
}

/// Parses the embedded content and builds the context for it.
fn init_site(locale: Locale) -> Result<(SiteContent, AppContext), StartupError> {
    let content = SiteContent::parse(SITE_CONTENT)?;
    let ctx = AppContext::new(content.slide_count(), locale)?;
    Ok((content, ctx))
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the stored language preference
/// - Parses the site content and creates the AppContext
/// - Wraps the page in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let site = init_site(preference::load_locale());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #faf7f2;
                    color: #3b2f2a;
                    font-family: 'Segoe UI', sans-serif;
                ">
                    <h1 style="color: #b5523b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #7a6a61; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            {site.map(|(content, ctx)| view! { <Site content=content ctx=ctx /> })}
        </ErrorBoundary>
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::config::LANGUAGE_PREFERENCE_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn stored_preference() -> Option<String> {
        dom::local_storage().and_then(|s| s.get_item(LANGUAGE_PREFERENCE_KEY).ok().flatten())
    }

    fn root_attr(name: &str) -> Option<String> {
        dom::document()?.document_element()?.get_attribute(name)
    }

    #[wasm_bindgen_test]
    fn test_toggle_persists_and_mirrors_document() {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(LANGUAGE_PREFERENCE_KEY);
        }
        let ctx = AppContext::new(5, Locale::En).unwrap();

        assert_eq!(ctx.toggle_locale(), Locale::Ar);
        assert_eq!(stored_preference().as_deref(), Some("ar"));
        assert_eq!(root_attr("dir").as_deref(), Some("rtl"));
        assert_eq!(root_attr("lang").as_deref(), Some("ar"));
        assert_eq!(dom::document().unwrap().title(), "برايم - خدمات الطعام والضيافة");

        assert_eq!(ctx.toggle_locale(), Locale::En);
        assert_eq!(stored_preference().as_deref(), Some("en"));
        assert_eq!(root_attr("dir").as_deref(), Some("ltr"));

        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(LANGUAGE_PREFERENCE_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn test_set_locale_does_not_persist() {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(LANGUAGE_PREFERENCE_KEY);
        }
        let ctx = AppContext::new(5, Locale::En).unwrap();
        ctx.set_locale(Locale::Ar);
        assert_eq!(stored_preference(), None);
        assert_eq!(root_attr("dir").as_deref(), Some("rtl"));
        ctx.set_locale(Locale::En);
    }
}
