//! Projection of a bracket into submission-ready match records.
//!
//! The records follow the persistence layer's contract field for field; a
//! `None` team id is a slot nobody occupies yet (or the empty side of a bye).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationIssue;
use crate::types::{Bracket, CompetitorId, GroupId, Match, MatchStatus, Round, StageId};

/// Number of games in a match series. Always odd and at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BestOf(u32);

impl BestOf {
    pub const ONE: BestOf = BestOf(1);

    pub fn new(games: u32) -> Result<Self, ValidationIssue> {
        if games == 0 || games % 2 == 0 {
            return Err(ValidationIssue::InvalidBestOf(games));
        }
        Ok(Self(games))
    }

    pub fn games(self) -> u32 {
        self.0
    }

    /// Games needed to take the series: ceil(games / 2)
    pub fn win_threshold(self) -> u32 {
        self.0.div_ceil(2)
    }
}

impl Default for BestOf {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for BestOf {
    type Error = ValidationIssue;

    fn try_from(games: u32) -> Result<Self, Self::Error> {
        Self::new(games)
    }
}

impl From<BestOf> for u32 {
    fn from(best_of: BestOf) -> Self {
        best_of.0
    }
}

impl fmt::Display for BestOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BO{}", self.0)
    }
}

/// One match as the persistence layer expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team1_id: Option<CompetitorId>,
    pub team2_id: Option<CompetitorId>,
    pub stage_id: StageId,
    pub group_id: Option<GroupId>,
    pub best_of: u32,
    pub status: MatchStatus,
    pub score_team1: u32,
    pub score_team2: u32,
    pub winner_id: Option<CompetitorId>,
    pub round_number: u32,
    pub match_order: u32,
}

/// Materialize every match of the bracket, round by round.
pub fn materialize(bracket: &Bracket, best_of: BestOf) -> Vec<MatchRecord> {
    let records: Vec<MatchRecord> = bracket
        .rounds
        .iter()
        .flat_map(|round| materialize_round(round, bracket.group_id, best_of))
        .collect();

    tracing::debug!(
        stage_id = bracket.stage_id,
        best_of = best_of.games(),
        records = records.len(),
        "materialized bracket"
    );
    records
}

/// Materialize the matches of a single round.
pub fn materialize_round(round: &Round, group_id: Option<GroupId>, best_of: BestOf) -> Vec<MatchRecord> {
    round
        .matches
        .iter()
        .map(|m| materialize_match(m, group_id, best_of))
        .collect()
}

/// Materialize one match.
///
/// A bye gives the surviving side the win threshold and the empty side 0.
/// Pending matches start at 0-0 without a winner.
pub fn materialize_match(m: &Match, group_id: Option<GroupId>, best_of: BestOf) -> MatchRecord {
    let team1_id = m.slot_a.competitor_id();
    let team2_id = m.slot_b.competitor_id();

    let (status, score_team1, score_team2, winner_id) = match (&m.winner, m.status) {
        (Some(winner), MatchStatus::Finished) if m.is_bye() => {
            let threshold = best_of.win_threshold();
            let scores = if team1_id == Some(winner.id) {
                (threshold, 0)
            } else {
                (0, threshold)
            };
            (MatchStatus::Finished, scores.0, scores.1, Some(winner.id))
        }
        (Some(winner), MatchStatus::Finished) => {
            (MatchStatus::Finished, m.score_a, m.score_b, Some(winner.id))
        }
        _ => (MatchStatus::Pending, 0, 0, None),
    };

    MatchRecord {
        team1_id,
        team2_id,
        stage_id: m.stage_id,
        group_id,
        best_of: best_of.games(),
        status,
        score_team1,
        score_team2,
        winner_id,
        round_number: m.round_number,
        match_order: m.match_number,
    }
}

#[cfg(test)]
#[path = "materialize_tests.rs"]
mod materialize_tests;
