//! Participant filter
//!
//! Reduces a raw roster to the participants taking part in one run:
//! deduplication, eligibility, then exclusion-set removal, with a
//! consistency invariant guarding against identity-matching bugs.

use crate::core::error::DomainError;
use crate::core::identity::Identity;
use crate::roster::eligibility::EligibilityRule;
use crate::roster::entities::{ExclusionSet, Participant};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Why a participant was dropped from the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum DropReason {
    /// Identity appeared earlier in the raw roster; first occurrence kept
    Duplicate,
    /// Failed the eligibility rule (detail names the rule)
    Ineligible(String),
    /// Identity present in the exclusion set
    OptedOut,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::Duplicate => write!(f, "duplicate identity, keeping first occurrence"),
            DropReason::Ineligible(rule) => write!(f, "does not match {rule}"),
            DropReason::OptedOut => write!(f, "opted out"),
        }
    }
}

/// Audit record for a dropped participant
///
/// Drops are reported, never raised: an ineligible or opted-out participant
/// is expected, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedParticipant {
    pub identity: Identity,
    pub timezone: Option<String>,
    pub reason: DropReason,
}

impl DroppedParticipant {
    fn new(participant: &Participant, reason: DropReason) -> Self {
        Self {
            identity: participant.identity.clone(),
            timezone: participant.timezone.clone(),
            reason,
        }
    }
}

/// Result of a filter pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOutcome {
    /// Participants taking part in the run, in raw-roster order
    pub participants: Vec<Participant>,
    /// Everyone who was removed, with the reason, in removal order
    pub dropped: Vec<DroppedParticipant>,
}

impl FilterOutcome {
    /// Count of participants dropped for a given class of reason
    pub fn dropped_where(&self, pred: impl Fn(&DropReason) -> bool) -> usize {
        self.dropped.iter().filter(|d| pred(&d.reason)).count()
    }
}

/// Filter a raw roster down to the run's participants
///
/// Steps, in order:
/// 1. Deduplicate by identity, keeping the first occurrence.
/// 2. Drop participants failing `rule`.
/// 3. Drop remaining participants whose identity is in `exclusions`.
///
/// Relative order is preserved throughout. After step 3 the invariant
/// `excluded + retained == eligible` must hold; a violation means identity
/// matching is broken (case mismatch, surviving duplicates) and returns
/// [`DomainError::Consistency`] rather than attempting silent recovery.
pub fn filter_roster(
    raw: Vec<Participant>,
    rule: &EligibilityRule,
    exclusions: &ExclusionSet,
) -> Result<FilterOutcome, DomainError> {
    let mut dropped = Vec::new();

    // Step 1: deduplicate, keeping first occurrence
    let mut seen: HashSet<Identity> = HashSet::with_capacity(raw.len());
    let mut unique = Vec::with_capacity(raw.len());
    for participant in raw {
        if seen.insert(participant.identity.clone()) {
            unique.push(participant);
        } else {
            dropped.push(DroppedParticipant::new(&participant, DropReason::Duplicate));
        }
    }

    // Step 2: eligibility
    let mut eligible = Vec::with_capacity(unique.len());
    for participant in unique {
        if rule.is_eligible(&participant) {
            eligible.push(participant);
        } else {
            dropped.push(DroppedParticipant::new(
                &participant,
                DropReason::Ineligible(rule.description()),
            ));
        }
    }
    let eligible_count = eligible.len();

    // Step 3: exclusion set
    let excluded: Vec<&Participant> = eligible
        .iter()
        .filter(|p| exclusions.contains(&p.identity))
        .collect();
    let excluded_count = excluded.len();
    for participant in excluded {
        dropped.push(DroppedParticipant::new(participant, DropReason::OptedOut));
    }
    let participants: Vec<Participant> = eligible
        .into_iter()
        .filter(|p| !exclusions.contains(&p.identity))
        .collect();

    // Sanity check: every eligible participant is either excluded or retained
    if excluded_count + participants.len() != eligible_count {
        return Err(DomainError::Consistency {
            eligible: eligible_count,
            excluded: excluded_count,
            retained: participants.len(),
        });
    }

    Ok(FilterOutcome {
        participants,
        dropped,
    })
}
