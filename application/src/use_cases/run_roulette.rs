//! Run roulette use case
//!
//! Orchestrates the full pipeline as two explicit phases:
//!
//! - **plan**: fetch roster and exclusions, filter, draw groups. Pure after
//!   the two fetches, so it is unit-testable with static sources and safe to
//!   run as many times as you like (`--dry-run`).
//! - **commit**: render the plan, gate on operator confirmation, then notify
//!   each group and finally the administrative recipient. The only
//!   side-effecting phase.

use crate::ports::exclusion_source::ExclusionSource;
use crate::ports::notifier::Notifier;
use crate::ports::presenter::{ConfirmationError, Presenter};
use crate::ports::roster_source::{RosterSource, SourceError};
use crate::use_cases::messages;
use roulette_domain::{
    DomainError, FilterOutcome, RouletteDraw, RunConfig, draw_groups, filter_roster,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a roulette run
#[derive(Error, Debug)]
pub enum RunRouletteError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("confirmation error: {0}")]
    Confirmation(#[from] ConfirmationError),
}

/// A fully computed, not-yet-committed run
#[derive(Debug, Clone, Serialize)]
pub struct RoulettePlan {
    /// Config echo, so renderings and dumps carry the seed
    pub config: RunConfig,
    /// Filter audit: who was dropped and why
    pub filter: FilterOutcome,
    /// The seeded draw
    pub draw: RouletteDraw,
}

/// What happened in the commit phase
#[derive(Debug)]
pub enum CommitOutcome {
    /// Operator declined; nothing was sent
    Declined,
    /// Notification ran; see the report for per-group failures
    Delivered(DeliveryReport),
}

/// Per-group delivery outcomes for the final summary
#[derive(Debug, Clone, Default)]
pub struct DeliveryReport {
    /// Groups successfully notified
    pub delivered: usize,
    /// (group index, reason) for each failed delivery
    pub failures: Vec<(usize, String)>,
    /// Whether the admin summary itself went through
    pub admin_notified: bool,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.admin_notified
    }
}

/// Use case driving one roulette run end to end
pub struct RunRouletteUseCase<R, E, N>
where
    R: RosterSource,
    E: ExclusionSource,
    N: Notifier,
{
    roster: Arc<R>,
    exclusions: Arc<E>,
    notifier: Arc<N>,
}

impl<R, E, N> RunRouletteUseCase<R, E, N>
where
    R: RosterSource,
    E: ExclusionSource,
    N: Notifier,
{
    pub fn new(roster: Arc<R>, exclusions: Arc<E>, notifier: Arc<N>) -> Self {
        Self {
            roster,
            exclusions,
            notifier,
        }
    }

    /// Plan phase: fetch, filter, draw
    ///
    /// A failing source aborts before any grouping; a filter consistency
    /// violation aborts before any draw. No partial runs.
    pub async fn plan(&self, config: RunConfig) -> Result<RoulettePlan, RunRouletteError> {
        info!(seed = config.seed, "planning roulette run");

        let raw = self.roster.fetch_roster().await?;
        info!("fetched {} roster candidates", raw.len());

        let exclusions = self.exclusions.fetch_exclusions().await?;
        info!("fetched {} opt-outs", exclusions.len());

        let filter = filter_roster(raw, &config.eligibility, &exclusions)?;
        for dropped in &filter.dropped {
            debug!(identity = %dropped.identity, reason = %dropped.reason, "dropped");
        }
        info!("{} participants after filtering", filter.participants.len());

        let draw = draw_groups(filter.participants.clone(), &config)?;
        info!(
            groups = draw.groups.len(),
            discarded = draw.discarded,
            "drew groups"
        );
        for index in &draw.undersized {
            warn!(
                group = index + 1,
                size = draw.groups[*index].size(),
                target = config.group_size,
                "group smaller than target size"
            );
        }

        Ok(RoulettePlan {
            config,
            filter,
            draw,
        })
    }

    /// Commit phase: confirm, then notify
    ///
    /// Declining aborts with nothing sent. A failed group delivery is logged
    /// and recorded; the remaining groups still get their messages, and the
    /// admin summary reports every failure alongside the seed.
    pub async fn commit(
        &self,
        plan: &RoulettePlan,
        presenter: &dyn Presenter,
    ) -> Result<CommitOutcome, RunRouletteError> {
        presenter.render(plan);

        if !presenter.confirm().await? {
            info!("operator declined, aborting before any notification");
            return Ok(CommitOutcome::Declined);
        }

        let mut report = DeliveryReport::default();
        for (index, group) in plan.draw.groups.iter().enumerate() {
            let message = messages::group_message(group);
            match self.notifier.notify_group(group, &message).await {
                Ok(()) => {
                    info!(group = index + 1, size = group.size(), "notified group");
                    report.delivered += 1;
                }
                Err(e) => {
                    warn!(group = index + 1, error = %e, seed = plan.draw.seed, "delivery failed");
                    report.failures.push((index, e.to_string()));
                }
            }
        }

        let summary = messages::admin_summary(&plan.draw, &report);
        match self.notifier.notify_admin(&summary).await {
            Ok(()) => report.admin_notified = true,
            Err(e) => warn!(error = %e, "admin summary delivery failed"),
        }

        Ok(CommitOutcome::Delivered(report))
    }

    /// Run both phases with the confirmation gate in between
    pub async fn execute(
        &self,
        config: RunConfig,
        presenter: &dyn Presenter,
    ) -> Result<CommitOutcome, RunRouletteError> {
        let plan = self.plan(config).await?;
        self.commit(&plan, presenter).await
    }
}
