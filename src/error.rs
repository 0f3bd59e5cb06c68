use thiserror::Error;

/// Malformed puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A line that could not be parsed. `line` is 1-based.
    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("input contains no {0}")]
    Empty(&'static str),

    /// A total that does not fit in a `u64`.
    #[error("sum of {0} overflows u64")]
    Overflow(&'static str),
}

impl InputError {
    pub fn invalid_line(line: usize, reason: impl Into<String>) -> Self {
        InputError::InvalidLine {
            line,
            reason: reason.into(),
        }
    }
}
