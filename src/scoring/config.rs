use serde::{Deserialize, Serialize};

use super::types::Outcome;

/// Strategy scoring configuration.
///
/// Only the outcome points are configurable; shape scores are fixed.
///
/// Example YAML:
/// ```yaml
/// strategy:
///   outcome_points: { lose: 0, draw: 3, win: 6 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points awarded per outcome (default: 0/3/6)
    #[serde(default)]
    pub outcome_points: OutcomePoints,
}

/// Points awarded for losing, drawing and winning a round.
///
/// Missing fields fall back to the defaults, so `{ win: 10 }` keeps
/// lose=0 and draw=3.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutcomePoints {
    pub lose: u32,
    pub draw: u32,
    pub win: u32,
}

impl Default for OutcomePoints {
    fn default() -> Self {
        Self {
            lose: 0,
            draw: 3,
            win: 6,
        }
    }
}

impl OutcomePoints {
    pub fn points_for(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Lose => self.lose,
            Outcome::Draw => self.draw,
            Outcome::Win => self.win,
        }
    }
}
