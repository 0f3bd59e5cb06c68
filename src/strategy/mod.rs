pub mod parser;

pub use parser::{parse_round, parse_rounds, GuideColumn};

use crate::error::InputError;
use crate::scoring::{RoundScorer, ScoreBreakdown};

/// Score a guide whose second column is read with `column`.
pub fn score_guide(
    input: &str,
    column: GuideColumn,
    scorer: &RoundScorer,
) -> Result<ScoreBreakdown, InputError> {
    let rounds = parse_rounds(input, column)?;
    log::debug!("Parsed {} rounds ({:?} column)", rounds.len(), column);
    Ok(scorer.breakdown(&rounds))
}

/// Total score when the second column is the shape to play.
pub fn part_one(input: &str, scorer: &RoundScorer) -> Result<u64, InputError> {
    Ok(score_guide(input, GuideColumn::Choice, scorer)?.total)
}

/// Total score when the second column is the outcome to aim for.
pub fn part_two(input: &str, scorer: &RoundScorer) -> Result<u64, InputError> {
    Ok(score_guide(input, GuideColumn::Directive, scorer)?.total)
}
