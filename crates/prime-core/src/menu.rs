//! Mobile navigation menu state.

use crate::config::MOBILE_BREAKPOINT;

/// Open/closed state shared by the mobile menu panel and its toggle button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the menu. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handles a document click. Closes an open menu when the click landed
    /// outside both the navigation container and the language toggle.
    ///
    /// Returns `true` if the state changed.
    pub fn on_outside_click(&mut self, inside_nav: bool, inside_language_toggle: bool) -> bool {
        if self.open && !inside_nav && !inside_language_toggle {
            self.open = false;
            return true;
        }
        false
    }

    /// Handles a viewport resize. Desktop widths force the menu closed.
    ///
    /// Returns `true` if the state changed.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width > MOBILE_BREAKPOINT && self.open {
            self.open = false;
            return true;
        }
        false
    }
}
