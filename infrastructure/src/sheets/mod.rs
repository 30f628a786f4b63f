//! Opt-out sheet adapters

pub mod optout;

pub use optout::OptOutSheetSource;
