//! Infrastructure layer for lunch-roulette
//!
//! Adapters for the external collaborators: the Slack Web API (roster and
//! notification), the opt-out sheet (CSV export), and configuration file
//! loading. Each adapter implements a port defined in the application layer.

pub mod config;
pub mod sheets;
pub mod slack;

// Re-export commonly used types
pub use config::{FileConfig, RegionSection, loader::ConfigLoader};
pub use sheets::OptOutSheetSource;
pub use slack::{SlackClient, SlackError, SlackNotifier, SlackRosterSource};
