//! Eligibility rules for roster filtering

use crate::roster::entities::Participant;
use serde::{Deserialize, Serialize};

/// Rule determining whether a participant qualifies for a run
///
/// - `Everyone`: no restriction (default)
/// - `TimezonePrefix(p)`: the participant's timezone must start with `p`,
///   e.g. "America/Los_Angeles" to keep a roulette to one office's region.
///   A participant without a timezone tag never matches a prefix rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityRule {
    #[default]
    Everyone,
    TimezonePrefix(String),
}

impl EligibilityRule {
    /// Check whether a participant passes this rule
    pub fn is_eligible(&self, participant: &Participant) -> bool {
        match self {
            EligibilityRule::Everyone => true,
            EligibilityRule::TimezonePrefix(prefix) => participant
                .timezone
                .as_deref()
                .is_some_and(|tz| tz.starts_with(prefix)),
        }
    }

    /// Human-readable description, used in drop audit lines
    pub fn description(&self) -> String {
        match self {
            EligibilityRule::Everyone => "everyone".to_string(),
            EligibilityRule::TimezonePrefix(p) => format!("timezone starting with {p}"),
        }
    }
}

impl std::fmt::Display for EligibilityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
