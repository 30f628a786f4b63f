//! Roster entities and the participant filter

pub mod eligibility;
pub mod entities;
pub mod filter;
