//! Application configuration.
//!
//! Centralizes the web-side constants. Behavioral thresholds shared with the
//! state machines live in [`prime_core::config`]. Page copy is loaded at
//! compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Bilingual page copy, parsed into [`prime_core::SiteContent`] at startup.
pub const SITE_CONTENT: &str = include_str!("../assets/content/site.toml");

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key for the visitor's language preference.
pub const LANGUAGE_PREFERENCE_KEY: &str = "preferred-language";

// =============================================================================
// Element IDs
// =============================================================================

/// DOM ids of elements looked up outside the component tree.
pub mod ids {
    /// Mount point in `index.html`.
    pub const APP_ROOT: &str = "app";
    /// Navigation bar container (logo, links, menu trigger).
    pub const NAV_CONTAINER: &str = "navContainer";
    /// Language toggle button.
    pub const LANGUAGE_TOGGLE: &str = "languageToggle";
    /// Mobile navigation panel.
    pub const MOBILE_MENU: &str = "mobileMenu";
    /// Gallery slide track.
    pub const GALLERY_SLIDER: &str = "gallerySlider";
    /// Gallery dot row.
    pub const GALLERY_DOTS: &str = "galleryDots";
    /// Scroll-to-top button.
    pub const SCROLL_TO_TOP: &str = "scrollToTop";
}

// =============================================================================
// Gallery Animation
// =============================================================================

/// Delay before the slide entrance animation is re-applied (milliseconds).
pub const ANIMATION_RESTART_DELAY_MS: u32 = 100;

/// Inline `animation` value for the visible slide's content.
/// `fadeInUp` is declared in `assets/base.css`.
pub const SLIDE_ENTRANCE_ANIMATION: &str = "fadeInUp 1.2s ease";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
