//! Generator configuration

use serde::{Deserialize, Serialize};

use crate::error::BracketError;
use crate::materialize::BestOf;
use crate::seeding::SeedingMethod;

/// Default ceiling on competitors per bracket
pub const DEFAULT_MAX_COMPETITORS: usize = 128;

/// Limits and defaults applied to every generation request.
///
/// Every key is optional when loaded from TOML; missing keys take the
/// values from [`GeneratorConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_competitors: usize,
    pub max_competitors: usize,
    /// Series lengths a request may ask for
    pub allowed_best_of: Vec<u32>,
    /// Used when a request does not name a best-of
    pub default_best_of: u32,
    /// Used when a request does not name a seeding method
    pub default_seeding: SeedingMethod,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_competitors: 2,
            max_competitors: DEFAULT_MAX_COMPETITORS,
            allowed_best_of: vec![1, 3, 5, 7],
            default_best_of: 1,
            default_seeding: SeedingMethod::Sequential,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, BracketError> {
        let config: Self = toml::from_str(contents)?;
        // A bracket needs two sides no matter what the file says
        if config.min_competitors < 2 {
            return Err(BracketError::InvalidInput(format!(
                "min_competitors must be at least 2, got {}",
                config.min_competitors
            )));
        }
        if config.max_competitors < config.min_competitors {
            return Err(BracketError::InvalidInput(format!(
                "max_competitors ({}) is below min_competitors ({})",
                config.max_competitors, config.min_competitors
            )));
        }
        for &games in &config.allowed_best_of {
            BestOf::new(games).map_err(|issue| {
                BracketError::InvalidInput(format!("allowed_best_of: {}", issue))
            })?;
        }
        BestOf::new(config.default_best_of)
            .map_err(|issue| BracketError::InvalidInput(format!("default_best_of: {}", issue)))?;
        if !config.allows_best_of(config.default_best_of) {
            return Err(BracketError::InvalidInput(format!(
                "default_best_of ({}) is not in allowed_best_of {:?}",
                config.default_best_of, config.allowed_best_of
            )));
        }
        Ok(config)
    }

    pub fn allows_best_of(&self, games: u32) -> bool {
        self.allowed_best_of.contains(&games)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
