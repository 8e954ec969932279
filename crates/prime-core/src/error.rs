//! Error types for the core state machines.
//!
//! - [`CarouselError`] - Invalid slide counts and slide targets
//! - [`LocaleError`] - Unrecognized locale tokens
//! - [`ContentError`] - Site content file problems

use thiserror::Error;

/// Carousel construction and navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    #[error("carousel must contain at least one slide")]
    Empty,
    /// Explicit slide target outside `0..total`.
    #[error("slide {target} is out of range (carousel has {total} slides)")]
    OutOfRange { target: usize, total: usize },
}

/// Locale parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unknown locale token: {0:?}")]
    Unknown(String),
}

/// Site content loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The content file is not valid TOML or does not match the schema.
    #[error("invalid site content: {0}")]
    Parse(String),
    /// The gallery section has no slides.
    #[error("site content defines no gallery slides")]
    NoSlides,
}

impl From<toml::de::Error> for ContentError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}
