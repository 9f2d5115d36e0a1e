//! Request validation
//!
//! Runs before any seeding or pairing. Every problem in a request is
//! collected so the caller can report them all at once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::{ValidationErrors, ValidationIssue};
use crate::materialize::BestOf;
use crate::seeding::SeedingMethod;
use crate::types::{Competitor, GroupId, StageId};

/// A bracket generation request as it arrives from the roster layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub competitors: Vec<Competitor>,
    /// "sequential" or "random"; config default when absent
    #[serde(default)]
    pub seeding_method: Option<String>,
    pub stage_id: StageId,
    #[serde(default)]
    pub group_id: Option<GroupId>,
    /// Config default when absent
    #[serde(default)]
    pub best_of: Option<u32>,
}

impl GenerationRequest {
    pub fn new(competitors: Vec<Competitor>, stage_id: StageId) -> Self {
        Self {
            competitors,
            seeding_method: None,
            stage_id,
            group_id: None,
            best_of: None,
        }
    }

    pub fn with_seeding(mut self, method: impl Into<String>) -> Self {
        self.seeding_method = Some(method.into());
        self
    }

    pub fn with_best_of(mut self, games: u32) -> Self {
        self.best_of = Some(games);
        self
    }

    pub fn with_group(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }
}

/// A request that passed validation, with every field parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub competitors: Vec<Competitor>,
    pub seeding_method: SeedingMethod,
    pub stage_id: StageId,
    pub group_id: Option<GroupId>,
    pub best_of: BestOf,
}

/// Check a request against the configured limits.
pub fn validate(
    request: &GenerationRequest,
    config: &GeneratorConfig,
) -> Result<ValidatedRequest, ValidationErrors> {
    let mut issues = Vec::new();

    let count = request.competitors.len();
    if count < config.min_competitors {
        issues.push(ValidationIssue::TooFewCompetitors {
            count,
            min: config.min_competitors,
        });
    }
    if count > config.max_competitors {
        issues.push(ValidationIssue::TooManyCompetitors {
            count,
            max: config.max_competitors,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut reported = HashSet::new();
    for competitor in &request.competitors {
        if !seen.insert(competitor.id) && reported.insert(competitor.id) {
            issues.push(ValidationIssue::DuplicateCompetitorId(competitor.id));
        }
    }

    let seeding_method = match request.seeding_method.as_deref() {
        Some(raw) => raw.parse::<SeedingMethod>(),
        None => Ok(config.default_seeding),
    };

    let games = request.best_of.unwrap_or(config.default_best_of);
    let best_of = if config.allows_best_of(games) {
        BestOf::new(games)
    } else {
        Err(ValidationIssue::InvalidBestOf(games))
    };

    match (seeding_method, best_of) {
        (Ok(seeding_method), Ok(best_of)) if issues.is_empty() => Ok(ValidatedRequest {
            competitors: request.competitors.clone(),
            seeding_method,
            stage_id: request.stage_id,
            group_id: request.group_id,
            best_of,
        }),
        (seeding_method, best_of) => {
            issues.extend(seeding_method.err());
            issues.extend(best_of.err());
            tracing::debug!(issues = issues.len(), "rejected bracket request");
            Err(ValidationErrors::new(issues))
        }
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
