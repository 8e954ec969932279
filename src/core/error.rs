//! Error types for the web layer.
//!
//! - [`PreferenceError`] - localStorage access for the language preference
//! - [`StartupError`] - Page initialization failures shown by the error boundary

use std::fmt;

use prime_core::{CarouselError, ContentError};

/// Language preference persistence errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// localStorage not available (private mode, sandboxed iframe, ...).
    StorageUnavailable,
    /// Failed to write to localStorage.
    SaveFailed,
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "localStorage not available"),
            Self::SaveFailed => write!(f, "failed to save language preference"),
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Errors that prevent the page from rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// Embedded site content is invalid.
    Content(ContentError),
    /// Gallery could not be built from the content.
    Gallery(CarouselError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content(err) => write!(f, "Failed to load site content: {}", err),
            Self::Gallery(err) => write!(f, "Failed to build gallery: {}", err),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Content(err) => Some(err),
            Self::Gallery(err) => Some(err),
        }
    }
}

impl From<ContentError> for StartupError {
    fn from(err: ContentError) -> Self {
        Self::Content(err)
    }
}

impl From<CarouselError> for StartupError {
    fn from(err: CarouselError) -> Self {
        Self::Gallery(err)
    }
}
