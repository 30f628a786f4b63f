//! Region run modes

use crate::roster::eligibility::EligibilityRule;
use serde::{Deserialize, Serialize};

/// Office region a run is scoped to
///
/// Selecting a region picks the roster channel, the opt-out source and the
/// timezone eligibility rule. This is configuration plumbing, not grouping
/// logic: the engine never looks at the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    SanFrancisco,
    Melbourne,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::SanFrancisco => "sf",
            Region::Melbourne => "melbourne",
        }
    }

    /// Timezone prefix participants must match to join this region's run
    pub fn timezone_prefix(&self) -> &'static str {
        match self {
            Region::SanFrancisco => "America/Los_Angeles",
            Region::Melbourne => "Australia/Melbourne",
        }
    }

    /// The eligibility rule for this region's runs
    pub fn eligibility_rule(&self) -> EligibilityRule {
        EligibilityRule::TimezonePrefix(self.timezone_prefix().to_string())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sf" | "san-francisco" | "sanfrancisco" => Ok(Region::SanFrancisco),
            "melbourne" | "mel" => Ok(Region::Melbourne),
            _ => Err(format!("Unknown region: {s}. Valid: sf, melbourne")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::entities::Participant;

    #[test]
    fn test_parse_region() {
        assert_eq!("sf".parse::<Region>().ok(), Some(Region::SanFrancisco));
        assert_eq!("SF".parse::<Region>().ok(), Some(Region::SanFrancisco));
        assert_eq!("melbourne".parse::<Region>().ok(), Some(Region::Melbourne));
        assert!("moon-base".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_rule_filters_by_timezone() {
        let rule = Region::SanFrancisco.eligibility_rule();
        let local = Participant::new("a").with_timezone("America/Los_Angeles");
        let remote = Participant::new("b").with_timezone("Europe/Berlin");
        assert!(rule.is_eligible(&local));
        assert!(!rule.is_eligible(&remote));
    }
}
