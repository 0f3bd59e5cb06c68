use crate::error::InputError;
use crate::scoring::{resolve_choice, Choice, OutcomeDirective, Round};

/// How the second column of a strategy guide is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideColumn {
    /// `X`/`Y`/`Z` is the shape to play.
    Choice,
    /// `X`/`Y`/`Z` is the outcome to aim for.
    Directive,
}

fn single_char(token: &str, line: usize) -> Result<char, InputError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(InputError::invalid_line(
            line,
            format!("expected a single character, found '{}'", token),
        )),
    }
}

fn parse_opponent(token: &str, line: usize) -> Result<Choice, InputError> {
    match single_char(token, line)? {
        'A' => Ok(Choice::Rock),
        'B' => Ok(Choice::Paper),
        'C' => Ok(Choice::Scissors),
        other => Err(InputError::invalid_line(
            line,
            format!("unknown opponent shape '{}' (expected A, B or C)", other),
        )),
    }
}

fn parse_player(token: &str, line: usize) -> Result<Choice, InputError> {
    match single_char(token, line)? {
        'X' => Ok(Choice::Rock),
        'Y' => Ok(Choice::Paper),
        'Z' => Ok(Choice::Scissors),
        other => Err(InputError::invalid_line(
            line,
            format!("unknown shape '{}' (expected X, Y or Z)", other),
        )),
    }
}

fn parse_directive(token: &str, line: usize) -> Result<OutcomeDirective, InputError> {
    match single_char(token, line)? {
        'X' => Ok(OutcomeDirective::Lose),
        'Y' => Ok(OutcomeDirective::Draw),
        'Z' => Ok(OutcomeDirective::Win),
        other => Err(InputError::invalid_line(
            line,
            format!("unknown outcome '{}' (expected X, Y or Z)", other),
        )),
    }
}

/// Parse one non-blank guide line into a round. `line` is 1-based.
pub fn parse_round(text: &str, line: usize, column: GuideColumn) -> Result<Round, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [opponent, second] = tokens.as_slice() else {
        return Err(InputError::invalid_line(
            line,
            format!("expected 2 tokens, found {}", tokens.len()),
        ));
    };

    let opponent = parse_opponent(opponent, line)?;
    let player = match column {
        GuideColumn::Choice => parse_player(second, line)?,
        GuideColumn::Directive => resolve_choice(opponent, parse_directive(second, line)?),
    };

    Ok(Round::new(opponent, player))
}

/// Parse a whole strategy guide. Blank lines are skipped.
pub fn parse_rounds(input: &str, column: GuideColumn) -> Result<Vec<Round>, InputError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(idx, text)| parse_round(text, idx + 1, column))
        .collect()
}
