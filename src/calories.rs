use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Calorie counting configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CaloriesConfig {
    /// How many of the largest groups part two sums (default: 3)
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_top() -> usize {
    3
}

impl Default for CaloriesConfig {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

/// Split the input into groups of integers separated by blank lines.
///
/// Runs of blank lines count as a single separator, so no group is ever
/// empty.
pub fn parse_groups(input: &str) -> Result<Vec<Vec<u64>>, InputError> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for (idx, text) in input.lines().enumerate() {
        let text = text.trim();
        if text.is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
            continue;
        }

        let value = text.parse::<u64>().map_err(|e| {
            InputError::invalid_line(idx + 1, format!("invalid integer '{}': {}", text, e))
        })?;
        current.push(value);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    log::debug!("Parsed {} groups", groups.len());
    Ok(groups)
}

fn checked_sum<'a, I>(values: I, what: &'static str) -> Result<u64, InputError>
where
    I: IntoIterator<Item = &'a u64>,
{
    values
        .into_iter()
        .try_fold(0u64, |acc, value| acc.checked_add(*value))
        .ok_or(InputError::Overflow(what))
}

pub fn group_sums(groups: &[Vec<u64>]) -> Result<Vec<u64>, InputError> {
    groups
        .iter()
        .map(|group| checked_sum(group, "group values"))
        .collect()
}

/// Sum of the `n` largest values. Fewer than `n` values are all summed.
pub fn top_sum(sums: &[u64], n: usize) -> Result<u64, InputError> {
    let mut sorted = sums.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    checked_sum(sorted.iter().take(n), "top groups")
}

fn parse_sums(input: &str) -> Result<Vec<u64>, InputError> {
    let sums = group_sums(&parse_groups(input)?)?;
    if sums.is_empty() {
        return Err(InputError::Empty("groups"));
    }
    Ok(sums)
}

/// Largest group sum.
pub fn part_one(input: &str) -> Result<u64, InputError> {
    let sums = parse_sums(input)?;
    sums.into_iter().max().ok_or(InputError::Empty("groups"))
}

/// Sum of the `config.top` largest group sums.
pub fn part_two(input: &str, config: &CaloriesConfig) -> Result<u64, InputError> {
    let sums = parse_sums(input)?;
    top_sum(&sums, config.top)
}
