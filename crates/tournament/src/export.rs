//! Roster input, config loading and bracket export files

use anyhow::{Context, Result};
use bracket_core::{Competitor, GeneratedBracket, GeneratorConfig, MatchStatus};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A generated bracket as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketExport {
    /// Name/description of the event
    pub name: String,
    /// RNG seed used for random seeding, when one was given
    pub rng_seed: Option<u64>,
    pub generated: GeneratedBracket,
}

impl BracketExport {
    pub fn new(name: &str, rng_seed: Option<u64>, generated: GeneratedBracket) -> Self {
        Self {
            name: name.to_string(),
            rng_seed,
            generated,
        }
    }

    /// Save export to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize bracket")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load export from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Match records only, as the persistence layer takes them
    pub fn records_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.generated.records).context("Failed to serialize match records")
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let bracket = &self.generated.bracket;
        let mut report = String::new();
        report.push_str(&format!("=== Event: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Stage: {}, Group: {}, Format: {}\n",
            bracket.stage_id,
            bracket
                .group_id
                .map(|g| g.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.generated.best_of
        ));
        if let Some(seed) = self.rng_seed {
            report.push_str(&format!("RNG seed: {}\n", seed));
        }
        report.push('\n');
        report.push_str(&bracket.render_preview());

        let finished = self
            .generated
            .records
            .iter()
            .filter(|r| r.status == MatchStatus::Finished)
            .count();
        report.push_str(&format!(
            "\n{} match records ({} pre-resolved byes)\n",
            self.generated.records.len(),
            finished
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Load a roster: a JSON array of `{ "id": ..., "name": ... }`
pub fn load_roster(path: &Path) -> Result<Vec<Competitor>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    parse_roster(&contents).with_context(|| format!("Failed to parse roster {}", path.display()))
}

pub fn parse_roster(contents: &str) -> Result<Vec<Competitor>> {
    Ok(serde_json::from_str(contents)?)
}

/// Load the generator config, falling back to defaults without a path
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            GeneratorConfig::from_toml_str(&contents)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(GeneratorConfig::default()),
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
