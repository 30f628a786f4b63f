//! Ports (interfaces) for the external collaborators
//!
//! The core consumes these narrow contracts; adapters live in the
//! infrastructure and presentation layers.

pub mod exclusion_source;
pub mod notifier;
pub mod presenter;
pub mod roster_source;
