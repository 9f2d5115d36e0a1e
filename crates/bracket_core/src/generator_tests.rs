use super::*;
use crate::error::ValidationIssue;
use crate::seeding::SeedingMethod;
use crate::types::{Competitor, MatchStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn roster(n: u64) -> Vec<Competitor> {
    (1..=n).map(|i| Competitor::new(i, format!("Team {}", i))).collect()
}

#[test]
fn test_sequential_generation_is_deterministic() {
    let request = GenerationRequest::new(roster(13), 2);
    let config = GeneratorConfig::default();

    let first = generate(&request, &config, &mut StdRng::seed_from_u64(1)).unwrap();
    let second = generate(&request, &config, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_random_generation_fixed_seed() {
    let request = GenerationRequest::new(roster(13), 2).with_seeding("random");
    let config = GeneratorConfig::default();

    let first = generate(&request, &config, &mut StdRng::seed_from_u64(5)).unwrap();
    let second = generate(&request, &config, &mut StdRng::seed_from_u64(5)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.seeding_method, SeedingMethod::Random);
    assert_eq!(first.total_competitors, 13);
}

#[test]
fn test_invalid_request_produces_nothing() {
    let request = GenerationRequest::new(roster(1), 2);

    let err = generate(&request, &GeneratorConfig::default(), &mut StdRng::seed_from_u64(0)).unwrap_err();

    assert_eq!(
        err.issues(),
        &[ValidationIssue::TooFewCompetitors { count: 1, min: 2 }]
    );
}

#[test]
fn test_generate_records_uses_request_best_of() {
    let request = GenerationRequest::new(roster(5), 8).with_best_of(5).with_group(1);

    let generated =
        generate_records(&request, &GeneratorConfig::default(), &mut StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(generated.best_of.games(), 5);
    assert_eq!(generated.records.len(), generated.bracket.total_matches());
    assert!(generated.records.iter().all(|r| r.best_of == 5 && r.group_id == Some(1)));

    let byes: Vec<_> = generated
        .records
        .iter()
        .filter(|r| r.round_number == 1 && r.status == MatchStatus::Finished)
        .collect();
    assert_eq!(byes.len(), 3);
    assert!(byes.iter().all(|r| r.score_team1 == 3 && r.score_team2 == 0));
}
