//! UI components built with Leptos.
//!
//! - [`site`] - Page root wiring context, listeners, and sections
//! - [`nav`] - Navigation bar, mobile menu, and language toggle
//! - [`gallery`] - Slide carousel with dots and swipe support
//! - [`sections`] - Static content sections (hero, about, services, contact)
//! - [`scroll_top`] - Scroll-to-top button
//! - [`anchor`] - Same-page links with smooth scrolling
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod anchor;
pub mod gallery;
pub mod icons;
pub mod nav;
pub mod scroll_top;
pub mod sections;
pub mod site;
pub mod text;

pub use site::Site;
