//! Dealing strategies for distributing shuffled participants into groups

use serde::{Deserialize, Serialize};

/// How shuffled participants are dealt into groups
///
/// - `RoundRobin` (default): participant `i` goes to group `i mod N` where
///   `N = max(1, floor(len / size))`. Group sizes differ by at most 1 and
///   every group has at least `size` members when enough people signed up.
/// - `Slice`: contiguous chunks of exactly `size`, with a possibly short
///   trailing group. Kept for parity with historical runs that dealt this
///   way; round-robin avoids the short tail and is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingStrategy {
    #[default]
    RoundRobin,
    Slice,
}

impl GroupingStrategy {
    /// Number of groups this strategy forms for `count` participants
    pub fn group_count(&self, count: usize, size: usize) -> usize {
        match self {
            GroupingStrategy::RoundRobin => std::cmp::max(1, count / size),
            GroupingStrategy::Slice => std::cmp::max(1, count.div_ceil(size)),
        }
    }

    /// Get a human-readable description of this strategy
    pub fn description(&self) -> &'static str {
        match self {
            GroupingStrategy::RoundRobin => "round-robin (balanced sizes)",
            GroupingStrategy::Slice => "contiguous slices (legacy, short tail)",
        }
    }
}

impl std::fmt::Display for GroupingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for GroupingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round-robin" | "round_robin" | "roundrobin" => Ok(GroupingStrategy::RoundRobin),
            "slice" | "slices" => Ok(GroupingStrategy::Slice),
            _ => Err(format!(
                "Unknown grouping strategy: {s}. Valid: round-robin, slice"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_group_count() {
        let s = GroupingStrategy::RoundRobin;
        assert_eq!(s.group_count(10, 4), 2);
        assert_eq!(s.group_count(13, 5), 2);
        assert_eq!(s.group_count(1, 5), 1);
        assert_eq!(s.group_count(5, 5), 1);
    }

    #[test]
    fn test_slice_group_count() {
        let s = GroupingStrategy::Slice;
        assert_eq!(s.group_count(10, 4), 3);
        assert_eq!(s.group_count(8, 4), 2);
        assert_eq!(s.group_count(1, 5), 1);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            "round-robin".parse::<GroupingStrategy>().ok(),
            Some(GroupingStrategy::RoundRobin)
        );
        assert_eq!(
            "slice".parse::<GroupingStrategy>().ok(),
            Some(GroupingStrategy::Slice)
        );
        assert!("diagonal".parse::<GroupingStrategy>().is_err());
    }

    #[test]
    fn test_default_is_round_robin() {
        assert_eq!(GroupingStrategy::default(), GroupingStrategy::RoundRobin);
    }
}
