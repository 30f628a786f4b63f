//! Notifier port
//!
//! Delivers group-assignment messages and the administrative summary over a
//! messaging side-channel (group chat, email).

use async_trait::async_trait;
use roulette_domain::Group;
use thiserror::Error;

/// Errors while delivering a single message
///
/// Delivery failures are non-fatal to the run as a whole: the use case logs
/// them, keeps notifying the remaining groups and reports the failures in
/// the final summary.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("delivery rejected: {0}")]
    Rejected(String),

    /// A member has no contact handle the channel can address
    #[error("no contact handle for {0}")]
    MissingContact(String),
}

/// Port for delivering notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message` to all members of `group` (e.g. a group chat)
    async fn notify_group(&self, group: &Group, message: &str) -> Result<(), DeliveryError>;

    /// Deliver the run summary (seed + full assignment dump) to the
    /// administrative recipient for audit and reproducibility
    async fn notify_admin(&self, message: &str) -> Result<(), DeliveryError>;
}
