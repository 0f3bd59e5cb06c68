pub mod config;
pub mod engine;
pub mod types;
pub mod validation;

pub use config::*;
pub use engine::{resolve_choice, RoundScorer, ScoreBreakdown};
pub use types::{Choice, Outcome, OutcomeDirective, Round};
pub use validation::validate_scoring;
