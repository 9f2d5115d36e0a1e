use super::*;
use crate::builder::BracketBuilder;
use crate::pairing::pair;
use crate::types::{Competitor, Slot};

fn bracket(n: u64) -> Bracket {
    let roster: Vec<Competitor> = (1..=n).map(|i| Competitor::new(i, format!("T{}", i))).collect();
    BracketBuilder::new(5)
        .group(Some(2))
        .build(&pair(&roster).unwrap())
        .unwrap()
}

#[test]
fn test_best_of_validation() {
    assert!(BestOf::new(1).is_ok());
    assert!(BestOf::new(3).is_ok());
    assert_eq!(BestOf::new(0), Err(ValidationIssue::InvalidBestOf(0)));
    assert_eq!(BestOf::new(4), Err(ValidationIssue::InvalidBestOf(4)));
    assert_eq!(BestOf::default(), BestOf::ONE);
}

#[test]
fn test_win_threshold() {
    assert_eq!(BestOf::ONE.win_threshold(), 1);
    assert_eq!(BestOf::new(3).unwrap().win_threshold(), 2);
    assert_eq!(BestOf::new(5).unwrap().win_threshold(), 3);
    assert_eq!(BestOf::new(7).unwrap().win_threshold(), 4);
}

#[test]
fn test_bye_scores_with_best_of_three() {
    let records = materialize(&bracket(5), BestOf::new(3).unwrap());

    let bye = &records[0];
    assert_eq!(bye.team1_id, Some(1));
    assert_eq!(bye.team2_id, None);
    assert_eq!(bye.score_team1, 2);
    assert_eq!(bye.score_team2, 0);
    assert_eq!(bye.status, MatchStatus::Finished);
    assert_eq!(bye.winner_id, Some(1));
    assert_eq!(bye.best_of, 3);

    let played = &records[3];
    assert_eq!((played.team1_id, played.team2_id), (Some(4), Some(5)));
    assert_eq!((played.score_team1, played.score_team2), (0, 0));
    assert_eq!(played.status, MatchStatus::Pending);
    assert_eq!(played.winner_id, None);
}

#[test]
fn test_bye_in_second_slot_scores_team2() {
    let m = Match {
        match_number: 1,
        slot_a: Slot::Bye,
        slot_b: Slot::Competitor(Competitor::new(8, "H")),
        round_number: 1,
        stage_id: 1,
        status: MatchStatus::Finished,
        score_a: 0,
        score_b: 0,
        winner: Some(Competitor::new(8, "H")),
        advances_to_match_number: Some(1),
    };

    let record = materialize_match(&m, None, BestOf::new(5).unwrap());

    assert_eq!((record.score_team1, record.score_team2), (0, 3));
    assert_eq!(record.winner_id, Some(8));
}

#[test]
fn test_placeholders_stay_pending() {
    let records = materialize(&bracket(8), BestOf::ONE);

    for record in records.iter().filter(|r| r.round_number > 1) {
        assert_eq!(record.team1_id, None);
        assert_eq!(record.team2_id, None);
        assert_eq!(record.status, MatchStatus::Pending);
        assert_eq!(record.winner_id, None);
        assert_eq!((record.score_team1, record.score_team2), (0, 0));
    }
}

#[test]
fn test_record_order_and_passthrough() {
    let records = materialize(&bracket(6), BestOf::ONE);

    // 4 + 2 + 1
    assert_eq!(records.len(), 7);
    let order: Vec<(u32, u32)> = records.iter().map(|r| (r.round_number, r.match_order)).collect();
    assert_eq!(order, vec![(1, 1), (1, 2), (1, 3), (1, 4), (2, 1), (2, 2), (3, 1)]);
    assert!(records.iter().all(|r| r.stage_id == 5 && r.group_id == Some(2)));
}

#[test]
fn test_materialize_single_round() {
    let source = bracket(3);
    let round = source.first_round().unwrap();

    let records = materialize_round(round, None, BestOf::ONE);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].winner_id, Some(1));
    assert_eq!(records[0].score_team1, 1);
    assert!(records.iter().all(|r| r.group_id.is_none()));
}

#[test]
fn test_materialize_does_not_mutate_source() {
    let source = bracket(5);
    let before = source.clone();

    let _ = materialize(&source, BestOf::new(7).unwrap());

    assert_eq!(source, before);
}

#[test]
fn test_record_json_shape() {
    let records = materialize(&bracket(3), BestOf::new(3).unwrap());
    let json = serde_json::to_value(&records[0]).unwrap();

    assert_eq!(json["team1_id"], 1);
    assert!(json["team2_id"].is_null());
    assert_eq!(json["stage_id"], 5);
    assert_eq!(json["group_id"], 2);
    assert_eq!(json["best_of"], 3);
    assert_eq!(json["status"], "finished");
    assert_eq!(json["score_team1"], 2);
    assert_eq!(json["score_team2"], 0);
    assert_eq!(json["winner_id"], 1);
    assert_eq!(json["round_number"], 1);
    assert_eq!(json["match_order"], 1);
}

#[test]
fn test_best_of_deserialize_rejects_even() {
    assert!(serde_json::from_str::<BestOf>("4").is_err());
    assert_eq!(serde_json::from_str::<BestOf>("5").unwrap().games(), 5);
}
