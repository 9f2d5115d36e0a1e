//! The full generation pipeline: validate, seed, pair, build, materialize.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::builder::BracketBuilder;
use crate::config::GeneratorConfig;
use crate::error::BracketError;
use crate::materialize::{materialize, BestOf, MatchRecord};
use crate::pairing::pair;
use crate::seeding::seed;
use crate::types::Bracket;
use crate::validation::{validate, GenerationRequest, ValidatedRequest};

/// A generated bracket together with its submission-ready records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBracket {
    pub bracket: Bracket,
    pub best_of: BestOf,
    pub records: Vec<MatchRecord>,
}

/// Validate `request` and build its bracket.
///
/// `rng` is only used for random seeding.
pub fn generate<R: Rng + ?Sized>(
    request: &GenerationRequest,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Bracket, BracketError> {
    let validated = validate(request, config)?;
    build_validated(&validated, rng)
}

/// Validate `request`, build its bracket and materialize every match.
pub fn generate_records<R: Rng + ?Sized>(
    request: &GenerationRequest,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GeneratedBracket, BracketError> {
    let validated = validate(request, config)?;
    let bracket = build_validated(&validated, rng)?;
    let records = materialize(&bracket, validated.best_of);

    Ok(GeneratedBracket {
        bracket,
        best_of: validated.best_of,
        records,
    })
}

/// Build a bracket from an already validated request.
pub fn build_validated<R: Rng + ?Sized>(
    request: &ValidatedRequest,
    rng: &mut R,
) -> Result<Bracket, BracketError> {
    let seeded = seed(&request.competitors, request.seeding_method, rng);
    let pairings = pair(&seeded)?;
    let bracket = BracketBuilder::new(request.stage_id)
        .group(request.group_id)
        .seeding_method(request.seeding_method)
        .build(&pairings)?;

    tracing::info!(
        stage_id = bracket.stage_id,
        competitors = bracket.total_competitors,
        rounds = bracket.total_rounds,
        byes = bracket.byes().count(),
        "generated bracket"
    );
    Ok(bracket)
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod generator_tests;
