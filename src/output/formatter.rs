use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::scoring::ScoreBreakdown;

/// Answers for both parts of one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub puzzle: String,
    pub part_one: u64,
    pub part_two: u64,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a report as two labelled lines:
/// "part 1 result: N" and "part 2 result: N"
pub fn format_report(report: &Report, use_colors: bool) -> String {
    [(1, report.part_one), (2, report.part_two)]
        .iter()
        .map(|(part, value)| {
            let label = format!("part {} result:", part);
            if use_colors {
                format!("{} {}", label.bold(), value)
            } else {
                format!("{} {}", label, value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a report as a single JSON object
pub fn format_json(report: &Report) -> Result<String> {
    serde_json::to_string(report).context("Failed to serialize report")
}

/// Format a strategy score breakdown (for verbose mode)
pub fn format_breakdown(title: &str, breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    let header = if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    };

    format!(
        "{}\n  Rounds: {} ({} won, {} drawn, {} lost)\n  Shape points: {}\n  Outcome points: {}\n  Total: {}",
        header,
        breakdown.rounds,
        breakdown.wins,
        breakdown.draws,
        breakdown.losses,
        breakdown.shape_points,
        breakdown.outcome_points,
        breakdown.total
    )
}
