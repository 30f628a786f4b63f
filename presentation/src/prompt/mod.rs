//! Interactive confirmation prompt

use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use colored::Colorize;
use roulette_application::{ConfirmationError, Presenter, RoulettePlan};
use std::io::Write;

/// Presenter adapter that renders to the console and reads the operator's
/// answer from stdin
///
/// With `assume_yes` the plan is still rendered but the prompt is skipped;
/// that keeps the audit trail on screen for unattended reruns.
pub struct InteractivePrompt {
    assume_yes: bool,
}

impl InteractivePrompt {
    pub fn new() -> Self {
        Self { assume_yes: false }
    }

    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}

impl Default for InteractivePrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Presenter for InteractivePrompt {
    fn render(&self, plan: &RoulettePlan) {
        println!("{}", ConsoleFormatter::format_plan(plan));
    }

    async fn confirm(&self) -> Result<bool, ConfirmationError> {
        if self.assume_yes {
            return Ok(true);
        }

        print!("{} ", "Do these look right? (type \"y\")".cyan().bold());
        std::io::stdout()
            .flush()
            .map_err(|e| ConfirmationError::Io(e.to_string()))?;

        let mut answer = String::new();
        std::io::stdin()
            .read_line(&mut answer)
            .map_err(|e| ConfirmationError::Io(e.to_string()))?;

        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_domain::{EligibilityRule, ExclusionSet, Participant, RunConfig, draw_groups, filter_roster};

    #[tokio::test]
    async fn test_assume_yes_skips_the_prompt() {
        let prompt = InteractivePrompt::new().with_assume_yes(true);
        assert!(prompt.confirm().await.unwrap());
    }

    #[test]
    fn test_render_does_not_panic() {
        let filter = filter_roster(
            vec![Participant::new("a"), Participant::new("b")],
            &EligibilityRule::Everyone,
            &ExclusionSet::empty(),
        )
        .unwrap();
        let config = RunConfig::new(2).unwrap().with_seed(1);
        let draw = draw_groups(filter.participants.clone(), &config).unwrap();
        let plan = RoulettePlan {
            config,
            filter,
            draw,
        };
        InteractivePrompt::new().render(&plan);
    }
}
