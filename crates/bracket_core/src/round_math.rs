//! Round arithmetic for single-elimination brackets.

use crate::error::BracketError;

/// Number of rounds needed for `n` competitors: `ceil(log2(n))`, 0 for n <= 1.
pub fn rounds(n: usize) -> u32 {
    if n <= 1 {
        return 0;
    }
    // ceil(log2(n)) == bit length of n - 1
    usize::BITS - (n - 1).leading_zeros()
}

/// Same as [`rounds`] for a signed count, rejecting negative input.
pub fn checked_rounds(n: i64) -> Result<u32, BracketError> {
    let n = usize::try_from(n)
        .map_err(|_| BracketError::InvalidInput(format!("competitor count must be non-negative, got {}", n)))?;
    Ok(rounds(n))
}

/// Smallest power of two that holds `n` competitors, never less than 2.
///
/// Fails with `InvalidInput` when that power of two does not fit in a `usize`.
pub fn bracket_size(n: usize) -> Result<usize, BracketError> {
    n.max(2)
        .checked_next_power_of_two()
        .ok_or_else(|| BracketError::InvalidInput(format!("no bracket size fits {} competitors", n)))
}

/// Matches played in `round` (1-based) of a bracket of the given size.
pub fn matches_in_round(bracket_size: usize, round: u32) -> usize {
    bracket_size.checked_shr(round).unwrap_or(0)
}

/// Display name of `round` (1-based) in a bracket with `total_rounds` rounds.
pub fn round_name(round: u32, total_rounds: u32) -> String {
    match total_rounds.saturating_sub(round) {
        0 => "Final".to_string(),
        1 => "Semi-Finals".to_string(),
        2 => "Quarter-Finals".to_string(),
        rounds_left => {
            // 2^(rounds_left + 1) competitors are still in at this point
            match 1u128.checked_shl(rounds_left + 1) {
                Some(remaining) => format!("Round of {}", remaining),
                None => format!("Round of 2^{}", rounds_left + 1),
            }
        }
    }
}

#[cfg(test)]
#[path = "round_math_tests.rs"]
mod round_math_tests;
