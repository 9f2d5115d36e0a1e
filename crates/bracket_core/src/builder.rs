//! Expands first-round pairings into a full bracket skeleton.

use crate::error::BracketError;
use crate::pairing::Pairing;
use crate::round_math::{matches_in_round, round_name, rounds};
use crate::seeding::SeedingMethod;
use crate::types::{Bracket, GroupId, Match, MatchStatus, Round, Slot, StageId};

/// Builds brackets for one stage
#[derive(Debug, Clone)]
pub struct BracketBuilder {
    stage_id: StageId,
    group_id: Option<GroupId>,
    seeding_method: SeedingMethod,
}

impl BracketBuilder {
    pub fn new(stage_id: StageId) -> Self {
        Self {
            stage_id,
            group_id: None,
            seeding_method: SeedingMethod::Sequential,
        }
    }

    pub fn group(mut self, group_id: Option<GroupId>) -> Self {
        self.group_id = group_id;
        self
    }

    /// Seeding method recorded on the bracket; it does not reorder anything here.
    pub fn seeding_method(mut self, method: SeedingMethod) -> Self {
        self.seeding_method = method;
        self
    }

    /// Build the bracket from first-round pairings.
    ///
    /// Round 1 byes are resolved immediately. Every later round is made of
    /// pending placeholder matches with both slots TBD.
    ///
    /// The pairing count must be a non-zero power of two, otherwise the
    /// rounds cannot halve down to a single final.
    pub fn build(&self, pairings: &[Pairing]) -> Result<Bracket, BracketError> {
        if !pairings.len().is_power_of_two() {
            return Err(BracketError::InvalidInput(format!(
                "first round needs a power-of-two number of pairings, got {}",
                pairings.len()
            )));
        }
        let bracket_size = pairings.len() * 2;
        let total_rounds = rounds(bracket_size);
        let total_competitors = pairings
            .iter()
            .flat_map(|p| [&p.slot_a, &p.slot_b])
            .filter(|s| s.competitor().is_some())
            .count();

        let mut all_rounds = Vec::with_capacity(total_rounds as usize);
        all_rounds.push(self.first_round(pairings, total_rounds));
        for round_number in 2..=total_rounds {
            all_rounds.push(self.placeholder_round(bracket_size, round_number, total_rounds));
        }

        let bracket = Bracket {
            total_rounds,
            bracket_size,
            total_competitors,
            seeding_method: self.seeding_method,
            stage_id: self.stage_id,
            group_id: self.group_id,
            rounds: all_rounds,
        };

        tracing::debug!(
            stage_id = self.stage_id,
            total_rounds,
            bracket_size,
            matches = bracket.total_matches(),
            "built bracket skeleton"
        );
        Ok(bracket)
    }

    fn first_round(&self, pairings: &[Pairing], total_rounds: u32) -> Round {
        let matches = pairings
            .iter()
            .enumerate()
            .map(|(index, pairing)| {
                let winner = pairing.bye_winner().cloned();
                let status = if winner.is_some() {
                    MatchStatus::Finished
                } else {
                    MatchStatus::Pending
                };
                Match {
                    match_number: index as u32 + 1,
                    slot_a: pairing.slot_a.clone(),
                    slot_b: pairing.slot_b.clone(),
                    round_number: 1,
                    stage_id: self.stage_id,
                    status,
                    score_a: 0,
                    score_b: 0,
                    winner,
                    advances_to_match_number: next_match_number(index, 1, total_rounds),
                }
            })
            .collect();

        Round {
            round_number: 1,
            round_name: round_name(1, total_rounds),
            matches,
        }
    }

    fn placeholder_round(&self, bracket_size: usize, round_number: u32, total_rounds: u32) -> Round {
        let matches = (0..matches_in_round(bracket_size, round_number))
            .map(|index| Match {
                match_number: index as u32 + 1,
                slot_a: Slot::Tbd,
                slot_b: Slot::Tbd,
                round_number,
                stage_id: self.stage_id,
                status: MatchStatus::Pending,
                score_a: 0,
                score_b: 0,
                winner: None,
                advances_to_match_number: next_match_number(index, round_number, total_rounds),
            })
            .collect();

        Round {
            round_number,
            round_name: round_name(round_number, total_rounds),
            matches,
        }
    }
}

/// Match number (1-based) in the next round fed by the match at `index`.
fn next_match_number(index: usize, round_number: u32, total_rounds: u32) -> Option<u32> {
    if round_number < total_rounds {
        Some((index / 2) as u32 + 1)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod builder_tests;
