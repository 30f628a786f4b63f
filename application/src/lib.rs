//! Application layer for lunch-roulette
//!
//! This crate contains the plan/commit use case and the port definitions
//! for the external collaborators (roster source, exclusion source,
//! presenter, notifier). It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    exclusion_source::{ExclusionSource, StaticExclusionSource},
    notifier::{DeliveryError, Notifier},
    presenter::{AutoApprove, AutoDecline, ConfirmationError, Presenter},
    roster_source::{RosterSource, SourceError, StaticRosterSource},
};
pub use use_cases::run_roulette::{
    CommitOutcome, DeliveryReport, RoulettePlan, RunRouletteError, RunRouletteUseCase,
};
