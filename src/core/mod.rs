//! Browser-facing services: page event dispatch, preference storage, and
//! error types.

pub mod error;
pub mod events;
pub mod preference;
