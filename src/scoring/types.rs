/// A hand shape. Shapes are cyclic: `(v + 1) mod 3` beats `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Position in the cycle: 0, 1 or 2.
    pub fn index(self) -> i8 {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    /// Map any integer onto the cycle. Negative values wrap around.
    pub fn from_index(value: i64) -> Self {
        match value.rem_euclid(3) {
            0 => Choice::Rock,
            1 => Choice::Paper,
            _ => Choice::Scissors,
        }
    }

    /// Move `steps` positions along the cycle.
    pub fn offset(self, steps: i32) -> Self {
        Choice::from_index(i64::from(self.index()) + i64::from(steps))
    }

    /// The shape that beats this one.
    pub fn beaten_by(self) -> Self {
        self.offset(1)
    }

    /// The shape this one beats.
    pub fn beats(self) -> Self {
        self.offset(-1)
    }

    /// Fixed points for playing this shape: 1, 2 or 3.
    pub fn shape_score(self) -> u32 {
        self.index() as u32 + 1
    }
}

/// Desired result of a round, as written in the second column of a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeDirective {
    Lose,
    Draw,
    Win,
}

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl From<OutcomeDirective> for Outcome {
    fn from(directive: OutcomeDirective) -> Self {
        match directive {
            OutcomeDirective::Lose => Outcome::Lose,
            OutcomeDirective::Draw => Outcome::Draw,
            OutcomeDirective::Win => Outcome::Win,
        }
    }
}

/// One round: what the opponent played and what we played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub opponent: Choice,
    pub player: Choice,
}

impl Round {
    pub fn new(opponent: Choice, player: Choice) -> Self {
        Self { opponent, player }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_wraps_negative() {
        assert_eq!(Choice::from_index(-1), Choice::Scissors);
        assert_eq!(Choice::from_index(-3), Choice::Rock);
        assert_eq!(Choice::from_index(4), Choice::Paper);
    }

    #[test]
    fn test_index_roundtrip() {
        for choice in Choice::ALL {
            assert_eq!(Choice::from_index(i64::from(choice.index())), choice);
        }
    }

    #[test]
    fn test_offset_large_steps() {
        assert_eq!(Choice::Rock.offset(200), Choice::Scissors);
        assert_eq!(Choice::Paper.offset(126), Choice::Paper);
        assert_eq!(Choice::Rock.offset(i32::MAX), Choice::Paper);
        assert_eq!(Choice::Rock.offset(i32::MIN), Choice::Paper);
        assert_eq!(Choice::Scissors.offset(i32::MIN), Choice::Rock);
    }

    #[test]
    fn test_cycle_relations() {
        assert_eq!(Choice::Rock.beaten_by(), Choice::Paper);
        assert_eq!(Choice::Rock.beats(), Choice::Scissors);
        assert_eq!(Choice::Scissors.beaten_by(), Choice::Rock);
        assert_eq!(Choice::Paper.beats(), Choice::Rock);
    }

    #[test]
    fn test_shape_score() {
        assert_eq!(Choice::Rock.shape_score(), 1);
        assert_eq!(Choice::Paper.shape_score(), 2);
        assert_eq!(Choice::Scissors.shape_score(), 3);
    }
}
