//! Behavioral constants shared by the state machines.

/// Number of slides in the gallery.
pub const DEFAULT_SLIDE_COUNT: usize = 5;

/// Minimum horizontal touch displacement (CSS px) treated as a swipe.
/// Displacements at or below this value are taps.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Vertical scroll offset (CSS px) above which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Height of the fixed navigation bar subtracted from anchor scroll targets.
pub const HEADER_OFFSET: f64 = 100.0;

/// Viewport width (CSS px) above which the desktop layout applies.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
