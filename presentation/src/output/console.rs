//! Console output formatter for roulette plans and delivery reports

use colored::Colorize;
use roulette_application::{DeliveryReport, RoulettePlan};
use roulette_domain::DropReason;

/// Formats plans and reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the full proposal: audit lines, draw parameters, groups
    pub fn format_plan(plan: &RoulettePlan) -> String {
        let mut output = String::new();

        for dropped in &plan.filter.dropped {
            let line = format!("[{}] {} ({})", tag(&dropped.reason), dropped.identity, dropped.reason);
            output.push_str(&format!("{}\n", line.red()));
        }
        if !plan.filter.dropped.is_empty() {
            output.push('\n');
        }

        output.push_str(&format!(
            "{} {}\n",
            "Participants:".magenta(),
            plan.filter.participants.len()
        ));
        output.push_str(&format!(
            "{} {} (strategy: {})\n",
            "Groups:".magenta(),
            plan.draw.groups.len(),
            plan.draw.strategy
        ));
        output.push_str(&format!("{}\n", format!("Using random seed {}.", plan.draw.seed).yellow()));

        if plan.draw.discarded > 0 {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Lottery: {} group(s) drawn but not activated this run.",
                    plan.draw.discarded
                )
                .yellow()
            ));
        }

        for (index, group) in plan.draw.groups.iter().enumerate() {
            output.push_str(&format!("\n{}\n", format!("Group {} is:", index + 1).white().bold()));
            for member in group.members() {
                match &member.contact {
                    Some(contact) => {
                        output.push_str(&format!(" - {} ({})\n", member.label(), contact));
                    }
                    None => output.push_str(&format!(" - {}\n", member.label())),
                }
            }
            if plan.draw.undersized.contains(&index) {
                output.push_str(&format!(
                    "   {}\n",
                    format!(
                        "warning: only {} member(s), target is {}",
                        group.size(),
                        plan.config.group_size
                    )
                    .yellow()
                ));
            }
        }

        output
    }

    /// Format the plan as JSON (for piping into other tools)
    pub fn format_json(plan: &RoulettePlan) -> String {
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the post-commit delivery report
    pub fn format_report(report: &DeliveryReport) -> String {
        let mut output = String::new();

        if report.failures.is_empty() {
            output.push_str(&format!(
                "{}\n",
                format!("Notified all {} group(s).", report.delivered).green()
            ));
        } else {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Notified {} group(s); {} delivery failure(s):",
                    report.delivered,
                    report.failures.len()
                )
                .red()
                .bold()
            ));
            for (index, reason) in &report.failures {
                output.push_str(&format!("  - group {}: {}\n", index + 1, reason));
            }
        }

        if !report.admin_notified {
            output.push_str(&format!("{}\n", "Admin summary was NOT delivered.".red()));
        }

        output
    }
}

fn tag(reason: &DropReason) -> &'static str {
    match reason {
        DropReason::Duplicate => "DUP",
        DropReason::Ineligible(_) => "TZ",
        DropReason::OptedOut => "OPTOUT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_domain::{
        EligibilityRule, ExclusionSet, Participant, RunConfig, draw_groups, filter_roster,
    };

    fn plan() -> RoulettePlan {
        let raw = vec![
            Participant::new("arthur").with_contact("U1"),
            Participant::new("ford").with_contact("U2"),
            Participant::new("zaphod").with_contact("U3"),
            Participant::new("trillian").with_contact("U4"),
        ];
        let exclusions: ExclusionSet = ["zaphod"].into_iter().collect();
        let config = RunConfig::new(2).unwrap().with_seed(42);
        let filter = filter_roster(raw, &EligibilityRule::Everyone, &exclusions).unwrap();
        let draw = draw_groups(filter.participants.clone(), &config).unwrap();
        RoulettePlan {
            config,
            filter,
            draw,
        }
    }

    #[test]
    fn test_plan_rendering_shows_seed_groups_and_optouts() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_plan(&plan());

        assert!(text.contains("[OPTOUT] zaphod"));
        assert!(text.contains("Using random seed 42."));
        assert!(text.contains("Group 1 is:"));
        assert!(text.contains("(U1)") || text.contains("(U2)") || text.contains("(U4)"));
    }

    #[test]
    fn test_json_rendering_is_valid() {
        let json = ConsoleFormatter::format_json(&plan());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["draw"]["seed"], 42);
    }

    #[test]
    fn test_report_rendering_lists_failures() {
        colored::control::set_override(false);
        let report = DeliveryReport {
            delivered: 1,
            failures: vec![(1, "transport error: timeout".to_string())],
            admin_notified: true,
        };
        let text = ConsoleFormatter::format_report(&report);
        assert!(text.contains("group 2: transport error: timeout"));
    }
}
