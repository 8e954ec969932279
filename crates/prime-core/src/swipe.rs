//! Horizontal swipe recognition for the gallery.

use crate::config::SWIPE_THRESHOLD;
use crate::locale::Locale;

/// Physical direction of a recognized swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left (`start > end`).
    Left,
    /// Finger moved left-to-right (`start < end`).
    Right,
}

impl SwipeDirection {
    /// Classifies a touch sample. Displacements at or below the threshold
    /// are taps and yield `None`.
    pub fn classify(start: f64, end: f64) -> Option<Self> {
        let diff = start - end;
        if diff.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        Some(if diff > 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }

    /// Slide delta for this swipe under `locale`.
    ///
    /// Swiping left advances in LTR and goes back in RTL.
    pub fn slide_delta(self, locale: Locale) -> i32 {
        let forward = match self {
            SwipeDirection::Left => 1,
            SwipeDirection::Right => -1,
        };
        if locale.direction().is_rtl() {
            -forward
        } else {
            forward
        }
    }
}

/// Touch sample captured between `touchstart` and `touchend`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<f64>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the horizontal coordinate at touch start.
    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
    }

    /// Evaluates the gesture ending at `x` and clears the sample.
    ///
    /// Returns the slide delta to apply, or `None` for taps and for a touch
    /// end with no recorded start.
    pub fn finish(&mut self, x: f64, locale: Locale) -> Option<i32> {
        let start = self.start.take()?;
        SwipeDirection::classify(start, x).map(|dir| dir.slide_delta(locale))
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
