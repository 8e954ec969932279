//! Gallery carousel state.
//!
//! Tracks the visible slide and maps it to a horizontal track offset. In a
//! right-to-left layout the slides are laid out mirrored, so the offset sign
//! flips with the locale's direction.

use crate::error::CarouselError;
use crate::locale::Locale;

// ============================================================================
// Carousel
// ============================================================================

/// Index of the visible slide within a fixed number of slides.
///
/// Invariant: `index < total` and `total > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    total: usize,
}

impl Carousel {
    /// Creates a carousel showing the first of `total` slides.
    pub fn new(total: usize) -> Result<Self, CarouselError> {
        if total == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { index: 0, total })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Moves by `direction` slides, wrapping around both ends.
    ///
    /// Accepts any delta; the result is always in `0..total`.
    pub fn change_slide(&mut self, direction: i32) {
        let total = self.total as i64;
        let next = (self.index as i64 + direction as i64).rem_euclid(total);
        self.index = next as usize;
    }

    /// Jumps to `target`.
    ///
    /// Out-of-range targets are rejected and leave the index untouched.
    pub fn go_to_slide(&mut self, target: usize) -> Result<(), CarouselError> {
        if target >= self.total {
            return Err(CarouselError::OutOfRange {
                target,
                total: self.total,
            });
        }
        self.index = target;
        Ok(())
    }

    /// Whether the dot at `position` is the active one.
    #[inline]
    pub fn is_active(&self, position: usize) -> bool {
        position == self.index
    }

    /// Active flag for every dot, in order. Exactly one is `true`.
    pub fn active_flags(&self) -> Vec<bool> {
        (0..self.total).map(|i| self.is_active(i)).collect()
    }

    /// Horizontal track offset in percent of one slide width.
    ///
    /// Negative in LTR (track moves left), positive in RTL.
    pub fn translate_percent(&self, locale: Locale) -> i64 {
        let offset = self.index as i64 * 100;
        if locale.direction().is_rtl() {
            offset
        } else {
            -offset
        }
    }

    /// CSS `transform` value for the slide track.
    pub fn transform(&self, locale: Locale) -> String {
        format!("translateX({}%)", self.translate_percent(locale))
    }
}

// ============================================================================
// Tests
// ============================================================================
