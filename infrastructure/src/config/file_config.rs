//! File-based configuration structure

use roulette_domain::GroupingStrategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration loaded from `roulette.toml` (plus environment overrides)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub slack: SlackSection,
    pub roulette: RouletteSection,
    /// Per-region settings, keyed by region name (`sf`, `melbourne`)
    pub regions: BTreeMap<String, RegionSection>,
}

/// Slack credentials and the administrative recipient
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSection {
    /// Bot token (`xoxb-...`); also settable via `ROULETTE_SLACK__TOKEN`
    pub token: Option<String>,
    /// Recipient of the run summary (`@user` or a channel)
    pub admin_recipient: Option<String>,
}

/// Grouping defaults, overridable per run from the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouletteSection {
    pub group_size: usize,
    pub strategy: GroupingStrategy,
    /// Lottery mode: retain only this percentage of formed groups
    pub lottery_percent: Option<u8>,
    /// Pin the seed instead of deriving it from the date
    pub seed: Option<u64>,
}

impl Default for RouletteSection {
    fn default() -> Self {
        Self {
            group_size: 5,
            strategy: GroupingStrategy::default(),
            lottery_percent: None,
            seed: None,
        }
    }
}

/// One region's sources
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionSection {
    /// Channel whose membership forms the roster
    pub channel: Option<String>,
    /// Published CSV export of the opt-out sheet
    pub opt_out_url: Option<String>,
    /// Local CSV file of opt-outs (takes priority over the URL)
    pub opt_out_file: Option<String>,
    /// Zero-based column of the identity in the opt-out rows
    pub opt_out_column: Option<usize>,
}
