//! Roster source port
//!
//! Defines the interface for fetching the raw candidate roster.

use async_trait::async_trait;
use roulette_domain::{Identity, Participant};
use thiserror::Error;

/// Errors that can occur while fetching from a roster or exclusion source
///
/// All variants are fatal to the run: the pipeline aborts before any
/// grouping or notification occurs, never a partial run.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// An identity present in one source is missing from another (e.g. a
    /// channel member absent from the user directory). Failing fast here
    /// beats the silent skips that used to cause undercounts.
    #[error("identity {0} not found in the user directory")]
    UnknownIdentity(Identity),

    #[error("malformed source data: {0}")]
    Malformed(String),
}

/// Source of candidate participants
///
/// Implementations (adapters) live in the infrastructure layer: a chat
/// channel's membership list, a spreadsheet of signup responses.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetch the raw roster, in the source's natural order
    async fn fetch_roster(&self) -> Result<Vec<Participant>, SourceError>;
}

/// In-memory roster, for tests and dry runs
pub struct StaticRosterSource {
    participants: Vec<Participant>,
}

impl StaticRosterSource {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }
}

#[async_trait]
impl RosterSource for StaticRosterSource {
    async fn fetch_roster(&self) -> Result<Vec<Participant>, SourceError> {
        Ok(self.participants.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_roster_returns_participants_in_order() {
        let source = StaticRosterSource::new(vec![
            Participant::new("a"),
            Participant::new("b"),
        ]);
        let roster = source.fetch_roster().await.unwrap();
        assert_eq!(roster[0].identity, Identity::from("a"));
        assert_eq!(roster[1].identity, Identity::from("b"));
    }
}
