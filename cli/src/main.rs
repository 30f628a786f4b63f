//! CLI entrypoint for lunch-roulette
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use roulette_application::{
    CommitOutcome, ExclusionSource, Presenter, RunRouletteUseCase,
};
use roulette_domain::{GroupingStrategy, Region, RunConfig};
use roulette_infrastructure::{
    ConfigLoader, FileConfig, OptOutSheetSource, SlackClient, SlackNotifier, SlackRosterSource,
};
use roulette_presentation::{Cli, ConsoleFormatter, InteractivePrompt};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };

    let region: Region = cli
        .region
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let config = build_run_config(&cli, &file_config, region)?;

    info!("Starting lunch roulette for {region}");

    if !cli.quiet {
        println!();
        println!("Lunch roulette - {region}");
        println!(
            "group size {}, seed {}, {}",
            config.group_size, config.seed, config.strategy
        );
        println!();
    }

    // === Dependency Injection ===
    let region_config = file_config
        .regions
        .get(region.as_str())
        .with_context(|| format!("no [regions.{region}] section in the configuration"))?;
    let channel = region_config
        .channel
        .clone()
        .with_context(|| format!("no channel configured for region {region}"))?;

    let token = file_config
        .slack
        .token
        .clone()
        .context("Slack token not configured (slack.token or ROULETTE_SLACK__TOKEN)")?;
    let admin = file_config
        .slack
        .admin_recipient
        .clone()
        .context("admin recipient not configured (slack.admin_recipient)")?;

    let client = Arc::new(SlackClient::new(token));
    let roster = Arc::new(SlackRosterSource::new(Arc::clone(&client), channel));
    let notifier = Arc::new(SlackNotifier::new(Arc::clone(&client), admin));

    let presenter = InteractivePrompt::new().with_assume_yes(cli.yes);

    let mut exclusions = if let Some(path) = &region_config.opt_out_file {
        OptOutSheetSource::from_file(path)
    } else if let Some(url) = &region_config.opt_out_url {
        OptOutSheetSource::from_url(url)
    } else {
        bail!("no opt-out source configured for region {region} (opt_out_file or opt_out_url)");
    };
    if let Some(column) = region_config.opt_out_column {
        exclusions = exclusions.with_identity_column(column);
    }

    run(
        roster,
        Arc::new(exclusions),
        notifier,
        config,
        &presenter,
        cli.dry_run,
    )
    .await
}

/// Build the immutable run configuration: CLI flags override file values
fn build_run_config(cli: &Cli, file: &FileConfig, region: Region) -> Result<RunConfig> {
    let group_size = cli.group_size.unwrap_or(file.roulette.group_size);
    let mut config = RunConfig::new(group_size)?.with_eligibility(region.eligibility_rule());

    if let Some(seed) = cli.seed.or(file.roulette.seed) {
        config = config.with_seed(seed);
    }

    let strategy: GroupingStrategy = match &cli.strategy {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => file.roulette.strategy,
    };
    config = config.with_strategy(strategy);

    if let Some(percent) = cli.lottery.or(file.roulette.lottery_percent) {
        config = config.with_lottery(percent)?;
    }

    Ok(config)
}

/// Plan, then (unless dry-running) confirm and notify
async fn run<E: ExclusionSource + 'static>(
    roster: Arc<SlackRosterSource>,
    exclusions: Arc<E>,
    notifier: Arc<SlackNotifier>,
    config: RunConfig,
    presenter: &InteractivePrompt,
    dry_run: bool,
) -> Result<()> {
    let use_case = RunRouletteUseCase::new(roster, exclusions, notifier);

    let plan = use_case.plan(config).await?;

    if dry_run {
        presenter.render(&plan);
        println!("Dry run: no confirmation, nothing sent.");
        return Ok(());
    }

    match use_case.commit(&plan, presenter).await? {
        CommitOutcome::Declined => {
            println!("Aborted, nothing sent.");
        }
        CommitOutcome::Delivered(report) => {
            print!("{}", ConsoleFormatter::format_report(&report));
        }
    }

    Ok(())
}
