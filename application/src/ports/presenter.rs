//! Presenter port for the confirmation gate
//!
//! The proposed groups are shown to an operator who must explicitly approve
//! them before any message is sent. Declining aborts the run with nothing
//! delivered; notification is the last step, so no rollback is ever needed.
//!
//! # Built-in Implementations
//!
//! - [`AutoApprove`] - always confirms (for `--yes` runs and tests)
//! - [`AutoDecline`] - never confirms (for tests)
//!
//! For interactive use, see `InteractivePrompt` in the presentation layer.

use crate::use_cases::run_roulette::RoulettePlan;
use async_trait::async_trait;
use thiserror::Error;

/// Errors while obtaining a confirmation
///
/// These represent failures of the intervention mechanism, not decisions:
/// an operator typing "n" is a decline, not an error.
#[derive(Error, Debug)]
pub enum ConfirmationError {
    #[error("operation cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for rendering a plan and gating on operator approval
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Show the proposed groups and the filter audit to the operator
    fn render(&self, plan: &RoulettePlan);

    /// Ask for explicit approval; `false` aborts the run
    async fn confirm(&self) -> Result<bool, ConfirmationError>;
}

/// Always approves, without rendering anything
///
/// Use for unattended runs where the draw has already been reviewed (e.g.
/// a `--yes` rerun with a known seed). It skips the one safety gate the
/// pipeline has, so don't reach for it casually.
pub struct AutoApprove;

#[async_trait]
impl Presenter for AutoApprove {
    fn render(&self, _plan: &RoulettePlan) {}

    async fn confirm(&self) -> Result<bool, ConfirmationError> {
        Ok(true)
    }
}

/// Always declines
pub struct AutoDecline;

#[async_trait]
impl Presenter for AutoDecline {
    fn render(&self, _plan: &RoulettePlan) {}

    async fn confirm(&self) -> Result<bool, ConfirmationError> {
        Ok(false)
    }
}
