//! Core state machines for the PRIME site.
//!
//! Everything here is plain Rust with no browser dependency, so the
//! behavior of the page can be exercised with `cargo test`:
//!
//! - [`Carousel`] - Slide index with wrap-around and RTL-aware translation
//! - [`SwipeTracker`] - Touch start/end sampling into slide deltas
//! - [`Locale`] - English/Arabic locale with reading direction
//! - [`MenuState`] - Mobile navigation open/closed state
//! - [`scroll`] - Scroll-to-top threshold and anchor offset math
//! - [`SiteContent`] - Bilingual page copy loaded from TOML

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod locale;
pub mod menu;
pub mod scroll;
pub mod swipe;

pub use carousel::Carousel;
pub use content::{Localized, SiteContent};
pub use error::{CarouselError, ContentError, LocaleError};
pub use locale::{Direction, Locale};
pub use menu::MenuState;
pub use scroll::AnchorTarget;
pub use swipe::SwipeTracker;
