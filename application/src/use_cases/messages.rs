//! Message texts delivered by the notifier

use crate::use_cases::run_roulette::DeliveryReport;
use roulette_domain::{Group, RouletteDraw};

/// The message posted to each group's chat
pub fn group_message(group: &Group) -> String {
    format!(
        "Congratulations, you {} are together for this week's lunch roulette! \
         Feel free to continue the discussion here, I'm just a shy bot and \
         I'll keep quiet now.",
        group.size()
    )
}

/// The summary sent to the administrative recipient: seed, full assignment
/// dump and any delivery failures, enough to reproduce and debug the run.
pub fn admin_summary(draw: &RouletteDraw, report: &DeliveryReport) -> String {
    let mut text = format!(
        "Lunch roulette run summary\nseed = {}\nstrategy = {}\n",
        draw.seed, draw.strategy
    );

    for (index, group) in draw.groups.iter().enumerate() {
        let members: Vec<String> = group
            .members()
            .iter()
            .map(|p| format!("@{}", p.identity))
            .collect();
        text.push_str(&format!("group {}: {}\n", index + 1, members.join(", ")));
    }

    if draw.discarded > 0 {
        text.push_str(&format!(
            "lottery: {} group(s) formed but not activated this run\n",
            draw.discarded
        ));
    }

    if report.failures.is_empty() {
        text.push_str(&format!("delivered to all {} group(s)\n", report.delivered));
    } else {
        for (index, reason) in &report.failures {
            text.push_str(&format!("delivery FAILED for group {}: {}\n", index + 1, reason));
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_domain::{GroupingStrategy, Participant};

    fn draw() -> RouletteDraw {
        RouletteDraw {
            groups: vec![Group::new(vec![
                Participant::new("arthur"),
                Participant::new("ford"),
            ])],
            seed: 20260828,
            strategy: GroupingStrategy::RoundRobin,
            undersized: vec![],
            discarded: 2,
        }
    }

    #[test]
    fn test_group_message_mentions_size() {
        let g = Group::new(vec![Participant::new("a"), Participant::new("b")]);
        assert!(group_message(&g).contains("you 2 are together"));
    }

    #[test]
    fn test_admin_summary_carries_seed_and_assignments() {
        let report = DeliveryReport {
            delivered: 1,
            failures: vec![],
            admin_notified: false,
        };
        let text = admin_summary(&draw(), &report);
        assert!(text.contains("seed = 20260828"));
        assert!(text.contains("group 1: @arthur, @ford"));
        assert!(text.contains("not activated"));
    }

    #[test]
    fn test_admin_summary_lists_failures() {
        let report = DeliveryReport {
            delivered: 0,
            failures: vec![(0, "transport error: boom".to_string())],
            admin_notified: false,
        };
        let text = admin_summary(&draw(), &report);
        assert!(text.contains("FAILED for group 1"));
    }
}
