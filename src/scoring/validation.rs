use super::config::ScoringConfig;

/// Validate strategy scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let points = &config.outcome_points;

    if points.lose > points.draw {
        errors.push(format!(
            "strategy.outcome_points: lose ({}) must not exceed draw ({})",
            points.lose, points.draw
        ));
    }

    if points.draw > points.win {
        errors.push(format!(
            "strategy.outcome_points: draw ({}) must not exceed win ({})",
            points.draw, points.win
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
