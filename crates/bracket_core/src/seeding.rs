//! Seeding policies
//!
//! Seeding only reorders the roster; the position in the returned list is the
//! competitor's seed rank (index 0 = seed 1).

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ValidationIssue;
use crate::types::Competitor;

/// How competitors are ordered before pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SeedingMethod {
    /// Registration order is the seed order
    #[default]
    Sequential,
    /// Uniform random permutation
    Random,
}

impl SeedingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedingMethod::Sequential => "sequential",
            SeedingMethod::Random => "random",
        }
    }
}

impl fmt::Display for SeedingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedingMethod {
    type Err = ValidationIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(SeedingMethod::Sequential),
            "random" => Ok(SeedingMethod::Random),
            _ => Err(ValidationIssue::InvalidSeedingMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for SeedingMethod {
    type Error = ValidationIssue;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Order `competitors` according to `method`.
///
/// `rng` is only consulted for [`SeedingMethod::Random`]; pass a seeded RNG
/// to get a reproducible permutation.
pub fn seed<R: Rng + ?Sized>(
    competitors: &[Competitor],
    method: SeedingMethod,
    rng: &mut R,
) -> Vec<Competitor> {
    let mut seeded = competitors.to_vec();
    if method == SeedingMethod::Random {
        // Fisher-Yates
        seeded.shuffle(rng);
    }
    tracing::debug!(method = %method, count = seeded.len(), "seeded competitors");
    seeded
}

#[cfg(test)]
#[path = "seeding_tests.rs"]
mod seeding_tests;
