//! Domain layer for lunch-roulette
//!
//! This crate contains the core business logic: the participant filter and
//! the grouping engine. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Roster
//!
//! The raw candidate list fetched from an external source (a chat channel's
//! membership, a signup sheet). The [`roster::filter`] module reduces it to
//! the eligible, non-opted-out participants for one run.
//!
//! ## Draw
//!
//! The grouping engine shuffles the filtered roster with a seeded generator
//! and deals it into balanced groups. The same seed and input ordering always
//! reproduce the same draw, so a run can be replayed for debugging.

pub mod config;
pub mod core;
pub mod grouping;
pub mod roster;

// Re-export commonly used types
pub use config::{Region, RunConfig, date_seed};
pub use core::{error::DomainError, identity::Identity};
pub use grouping::{
    engine::draw_groups,
    entities::{Group, RouletteDraw},
    strategy::GroupingStrategy,
};
pub use roster::{
    eligibility::EligibilityRule,
    entities::{ExclusionSet, Participant},
    filter::{DropReason, DroppedParticipant, FilterOutcome, filter_roster},
};
