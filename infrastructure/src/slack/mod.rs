//! Slack Web API adapters: roster source and notifier

pub mod client;
pub mod notifier;
pub mod roster;
pub mod types;

pub use client::{SlackClient, SlackError};
pub use notifier::SlackNotifier;
pub use roster::SlackRosterSource;
