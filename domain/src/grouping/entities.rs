//! Grouping entities

use crate::core::identity::Identity;
use crate::grouping::strategy::GroupingStrategy;
use crate::roster::entities::Participant;
use serde::{Deserialize, Serialize};

/// One lunch group: an ordered sequence of participants
///
/// Groups are ephemeral, created fresh each run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    members: Vec<Participant>,
}

impl Group {
    pub fn new(members: Vec<Participant>) -> Self {
        Self { members }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.members.iter().map(|p| &p.identity)
    }
}

/// The outcome of one grouping draw
///
/// Carries the seed so a failed or disputed run can be replayed exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouletteDraw {
    /// Groups in dealing order; within a group, shuffle order
    pub groups: Vec<Group>,
    /// Seed that produced this draw
    pub seed: u64,
    /// Strategy used to deal the groups
    pub strategy: GroupingStrategy,
    /// Indices of groups smaller than the target size, flagged for
    /// operator review (non-blocking)
    pub undersized: Vec<usize>,
    /// Groups formed but discarded by the lottery for this run
    pub discarded: usize,
}

impl RouletteDraw {
    /// Total participants across all retained groups
    pub fn participant_count(&self) -> usize {
        self.groups.iter().map(Group::size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_count_sums_groups() {
        let draw = RouletteDraw {
            groups: vec![
                Group::new(vec![Participant::new("a"), Participant::new("b")]),
                Group::new(vec![Participant::new("c")]),
            ],
            seed: 20260828,
            strategy: GroupingStrategy::RoundRobin,
            undersized: vec![],
            discarded: 0,
        };
        assert_eq!(draw.participant_count(), 3);
    }
}
