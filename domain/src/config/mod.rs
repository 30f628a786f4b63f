//! Run configuration
//!
//! A [`RunConfig`] is built once at startup from CLI/file/environment inputs
//! and passed immutably through the pipeline. Nothing reads configuration
//! from globals.

mod region;

pub use region::Region;

use crate::core::error::DomainError;
use crate::grouping::strategy::GroupingStrategy;
use crate::roster::eligibility::EligibilityRule;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Configuration for one roulette run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Target group size; every round-robin group gets at least this many
    /// members when enough participants remain
    pub group_size: usize,
    /// Seed for the shuffle; defaults to a date-derived value so reruns on
    /// the same day reproduce the same draw
    pub seed: u64,
    /// Who qualifies for this run
    pub eligibility: EligibilityRule,
    /// How shuffled participants are dealt into groups
    pub strategy: GroupingStrategy,
    /// Lottery mode: retain only this percentage of formed groups
    pub lottery_percent: Option<u8>,
}

impl RunConfig {
    /// Create a config with the given target group size
    ///
    /// The seed defaults to today's date ([`date_seed`]); strategy to
    /// round-robin; eligibility to everyone; lottery off.
    pub fn new(group_size: usize) -> Result<Self, DomainError> {
        if group_size == 0 {
            return Err(DomainError::InvalidGroupSize(group_size));
        }
        Ok(Self {
            group_size,
            seed: date_seed(),
            eligibility: EligibilityRule::default(),
            strategy: GroupingStrategy::default(),
            lottery_percent: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_eligibility(mut self, rule: EligibilityRule) -> Self {
        self.eligibility = rule;
        self
    }

    pub fn with_strategy(mut self, strategy: GroupingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable lottery mode, retaining `percent` of formed groups
    pub fn with_lottery(mut self, percent: u8) -> Result<Self, DomainError> {
        if percent == 0 || percent > 100 {
            return Err(DomainError::InvalidLotteryShare(percent));
        }
        self.lottery_percent = Some(percent);
        Ok(self)
    }
}

/// Default seed: today's date as `YYYYMMDD`
///
/// Reruns on the same day reproduce the same draw, which is what you want
/// when a run is interrupted and restarted.
pub fn date_seed() -> u64 {
    Local::now()
        .format("%Y%m%d")
        .to_string()
        .parse()
        .unwrap_or(0)
}
