//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for lunch-roulette
#[derive(Parser, Debug)]
#[command(name = "lunch-roulette")]
#[command(author, version, about = "Pairs employees into random lunch groups")]
#[command(long_about = r#"
Lunch roulette reads a region's roster (a Slack channel's membership), drops
opt-outs and wrong-timezone people, deals the rest into balanced random
groups, shows you the proposal, and - only after you confirm - opens a group
chat per group and posts the assignment, plus a summary to the admin
recipient.

The shuffle is seeded (default: today's date as YYYYMMDD), so a rerun on the
same day reproduces the same groups. Pass --seed to replay any past run.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./roulette.toml       Project-level config
3. ~/.config/lunch-roulette/config.toml   Global config

Example:
  lunch-roulette --region sf
  lunch-roulette --region melbourne --group-size 4 --dry-run
  lunch-roulette --region sf --seed 20260828 --yes
"#)]
pub struct Cli {
    /// Region to run for (sf, melbourne)
    #[arg(short, long, value_name = "REGION")]
    pub region: String,

    /// Target group size (default from config, usually 5)
    #[arg(short, long, value_name = "N")]
    pub group_size: Option<usize>,

    /// Random seed; defaults to today's date as YYYYMMDD
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Dealing strategy: round-robin (default) or slice (legacy)
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<String>,

    /// Lottery mode: activate only this percentage of formed groups
    #[arg(long, value_name = "PERCENT")]
    pub lottery: Option<u8>,

    /// Plan and render the groups without confirming or notifying
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt (unattended reruns of a reviewed seed)
    #[arg(short, long)]
    pub yes: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
