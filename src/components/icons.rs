//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as ArrowUp, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuGlobe as Language, LuMail as Mail, LuMapPin as Location, LuMenu as Menu,
        LuPhone as Phone, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as ArrowUp, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsEnvelope as Mail, BsGeoAltFill as Location, BsGlobe as Language, BsList as Menu,
        BsTelephone as Phone, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(LANGUAGE, Language);
themed_icon!(PHONE, Phone);
themed_icon!(MAIL, Mail);
themed_icon!(LOCATION, Location);
