//! Locale-aware text.

use leptos::prelude::*;
use prime_core::Localized;

use crate::app::AppContext;

/// Renders `text` in the active locale, updating when the locale changes.
#[component]
pub fn Tr(text: Localized) -> impl IntoView {
    let locale = use_context::<AppContext>()
        .expect("AppContext must be provided")
        .locale;
    move || text.get(locale.get()).to_string()
}
