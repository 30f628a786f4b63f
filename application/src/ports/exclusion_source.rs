//! Exclusion source port

use crate::ports::roster_source::SourceError;
use async_trait::async_trait;
use roulette_domain::ExclusionSet;

/// Source of opted-out identities
///
/// Read once per run; the resulting [`ExclusionSet`] is immutable for the
/// run. The identity namespace must match the roster source's.
#[async_trait]
pub trait ExclusionSource: Send + Sync {
    async fn fetch_exclusions(&self) -> Result<ExclusionSet, SourceError>;
}

/// In-memory exclusion set, for tests and runs without an opt-out sheet
#[derive(Default)]
pub struct StaticExclusionSource {
    exclusions: ExclusionSet,
}

impl StaticExclusionSource {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// A source that excludes nobody
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExclusionSource for StaticExclusionSource {
    async fn fetch_exclusions(&self) -> Result<ExclusionSet, SourceError> {
        Ok(self.exclusions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_domain::Identity;

    #[tokio::test]
    async fn test_empty_source_excludes_nobody() {
        let set = StaticExclusionSource::empty()
            .fetch_exclusions()
            .await
            .unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_static_source_round_trips() {
        let source = StaticExclusionSource::new(["a", "b"].into_iter().collect());
        let set = source.fetch_exclusions().await.unwrap();
        assert!(set.contains(&Identity::from("a")));
        assert_eq!(set.len(), 2);
    }
}
