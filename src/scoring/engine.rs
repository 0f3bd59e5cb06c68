use super::config::OutcomePoints;
use super::types::{Choice, Outcome, OutcomeDirective, Round};

/// Totals over a sequence of scored rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub rounds: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub shape_points: u64,
    pub outcome_points: u64,
    pub total: u64,
}

/// Scores rounds of rock-paper-scissors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundScorer {
    points: OutcomePoints,
}

impl RoundScorer {
    pub fn new(points: OutcomePoints) -> Self {
        Self { points }
    }

    /// Outcome from the player's side, from `(player - opponent) mod 3`:
    /// 0 is a draw, 1 a win, 2 a loss.
    pub fn outcome(round: &Round) -> Outcome {
        match (round.player.index() - round.opponent.index()).rem_euclid(3) {
            0 => Outcome::Draw,
            1 => Outcome::Win,
            _ => Outcome::Lose,
        }
    }

    /// Shape score plus outcome points.
    pub fn score(&self, round: &Round) -> u64 {
        u64::from(round.player.shape_score())
            + u64::from(self.points.points_for(Self::outcome(round)))
    }

    pub fn breakdown<'a, I>(&self, rounds: I) -> ScoreBreakdown
    where
        I: IntoIterator<Item = &'a Round>,
    {
        let mut breakdown = ScoreBreakdown::default();

        for round in rounds {
            let outcome = Self::outcome(round);
            match outcome {
                Outcome::Win => breakdown.wins += 1,
                Outcome::Draw => breakdown.draws += 1,
                Outcome::Lose => breakdown.losses += 1,
            }
            breakdown.rounds += 1;
            breakdown.shape_points = breakdown
                .shape_points
                .saturating_add(u64::from(round.player.shape_score()));
            breakdown.outcome_points = breakdown
                .outcome_points
                .saturating_add(u64::from(self.points.points_for(outcome)));
        }

        breakdown.total = breakdown.shape_points.saturating_add(breakdown.outcome_points);
        breakdown
    }
}

/// Pick the shape that produces `directive` against `opponent`.
pub fn resolve_choice(opponent: Choice, directive: OutcomeDirective) -> Choice {
    match directive {
        OutcomeDirective::Lose => opponent.beats(),
        OutcomeDirective::Draw => opponent,
        OutcomeDirective::Win => opponent.beaten_by(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::Choice::{Paper, Rock, Scissors};

    fn expected_outcome_score(diff: i8) -> u64 {
        match diff {
            0 => 3,
            1 => 6,
            _ => 0,
        }
    }

    #[test]
    fn test_score_all_pairs() {
        let scorer = RoundScorer::default();
        for opponent in Choice::ALL {
            for player in Choice::ALL {
                let diff = (player.index() - opponent.index()).rem_euclid(3);
                let expected = (player.index() as u64 + 1) + expected_outcome_score(diff);
                assert_eq!(scorer.score(&Round::new(opponent, player)), expected);
            }
        }
    }

    #[test]
    fn test_score_examples() {
        let scorer = RoundScorer::default();
        assert_eq!(scorer.score(&Round::new(Rock, Paper)), 8);
        assert_eq!(scorer.score(&Round::new(Paper, Rock)), 1);
        assert_eq!(scorer.score(&Round::new(Scissors, Scissors)), 6);
    }

    #[test]
    fn test_score_is_idempotent() {
        let scorer = RoundScorer::default();
        let round = Round::new(Scissors, Rock);
        assert_eq!(scorer.score(&round), scorer.score(&round));
        assert_eq!(scorer.score(&round), 7);
    }

    #[test]
    fn test_outcome_wraps_around() {
        // Rock (0) against Scissors (2): diff is -2, which must map to a win.
        assert_eq!(RoundScorer::outcome(&Round::new(Scissors, Rock)), Outcome::Win);
        assert_eq!(RoundScorer::outcome(&Round::new(Rock, Scissors)), Outcome::Lose);
    }

    #[test]
    fn test_resolve_draw_keeps_opponent() {
        for opponent in Choice::ALL {
            assert_eq!(resolve_choice(opponent, OutcomeDirective::Draw), opponent);
        }
    }

    #[test]
    fn test_resolve_produces_directive_outcome() {
        let directives = [
            OutcomeDirective::Lose,
            OutcomeDirective::Draw,
            OutcomeDirective::Win,
        ];
        for opponent in Choice::ALL {
            for directive in directives {
                let player = resolve_choice(opponent, directive);
                let round = Round::new(opponent, player);
                assert_eq!(RoundScorer::outcome(&round), Outcome::from(directive));
            }
        }
    }

    #[test]
    fn test_resolve_examples() {
        assert_eq!(resolve_choice(Rock, OutcomeDirective::Lose), Scissors);
        assert_eq!(resolve_choice(Scissors, OutcomeDirective::Win), Rock);
        assert_eq!(resolve_choice(Paper, OutcomeDirective::Win), Scissors);
    }

    #[test]
    fn test_custom_outcome_points() {
        let scorer = RoundScorer::new(OutcomePoints { lose: 1, draw: 2, win: 10 });
        assert_eq!(scorer.score(&Round::new(Rock, Paper)), 12);
        assert_eq!(scorer.score(&Round::new(Paper, Rock)), 2);
    }

    #[test]
    fn test_score_with_max_outcome_points() {
        let scorer = RoundScorer::new(OutcomePoints { lose: 0, draw: 0, win: u32::MAX });
        assert_eq!(
            scorer.score(&Round::new(Rock, Paper)),
            u64::from(u32::MAX) + 2
        );
    }

    #[test]
    fn test_breakdown_with_max_outcome_points() {
        let scorer = RoundScorer::new(OutcomePoints {
            lose: u32::MAX,
            draw: u32::MAX,
            win: u32::MAX,
        });
        let rounds = vec![Round::new(Rock, Paper), Round::new(Paper, Paper)];
        let breakdown = scorer.breakdown(&rounds);
        assert_eq!(breakdown.outcome_points, 2 * u64::from(u32::MAX));
        assert_eq!(breakdown.total, 2 * u64::from(u32::MAX) + 4);
    }

    #[test]
    fn test_breakdown_matches_summed_scores() {
        let scorer = RoundScorer::default();
        let rounds = vec![
            Round::new(Rock, Paper),
            Round::new(Paper, Rock),
            Round::new(Scissors, Scissors),
        ];

        let breakdown = scorer.breakdown(&rounds);
        let summed: u64 = rounds.iter().map(|r| scorer.score(r)).sum();

        assert_eq!(breakdown.total, summed);
        assert_eq!(breakdown.total, 15);
        assert_eq!(breakdown.rounds, 3);
        assert_eq!((breakdown.wins, breakdown.draws, breakdown.losses), (1, 1, 1));
        assert_eq!(breakdown.shape_points, 6);
        assert_eq!(breakdown.outcome_points, 9);
    }

    #[test]
    fn test_breakdown_empty() {
        let rounds: Vec<Round> = Vec::new();
        let breakdown = RoundScorer::default().breakdown(&rounds);
        assert_eq!(breakdown, ScoreBreakdown::default());
    }
}
