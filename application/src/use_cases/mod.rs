//! Use cases

pub mod messages;
pub mod run_roulette;
