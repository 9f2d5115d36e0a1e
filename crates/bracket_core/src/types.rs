//! Core bracket data types: competitors, slots, matches, rounds.

use serde::{Deserialize, Serialize};

use crate::seeding::SeedingMethod;

/// Identifier of a competitor, as issued by the external roster.
pub type CompetitorId = u64;

/// Opaque reference to the stage a bracket belongs to.
pub type StageId = u64;

/// Opaque reference to a group within a stage.
pub type GroupId = u64;

/// A registered competitor (team or player)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
}

impl Competitor {
    pub fn new(id: CompetitorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A position in the bracket.
///
/// A bye and an undecided slot are different things: a bye never gets an
/// occupant, while a TBD slot is waiting on the winner of an earlier match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "competitor", rename_all = "snake_case")]
pub enum Slot {
    Competitor(Competitor),
    Bye,
    Tbd,
}

impl Slot {
    pub fn competitor(&self) -> Option<&Competitor> {
        match self {
            Slot::Competitor(c) => Some(c),
            Slot::Bye | Slot::Tbd => None,
        }
    }

    pub fn competitor_id(&self) -> Option<CompetitorId> {
        self.competitor().map(|c| c.id)
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    pub fn is_tbd(&self) -> bool {
        matches!(self, Slot::Tbd)
    }

    /// Short label used in text previews
    pub fn label(&self) -> &str {
        match self {
            Slot::Competitor(c) => &c.name,
            Slot::Bye => "BYE",
            Slot::Tbd => "TBD",
        }
    }
}

/// Lifecycle of a match. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Finished,
}

/// A single match in the bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// 1-based position within its round
    pub match_number: u32,
    pub slot_a: Slot,
    pub slot_b: Slot,
    /// 1-based round number
    pub round_number: u32,
    pub stage_id: StageId,
    pub status: MatchStatus,
    pub score_a: u32,
    pub score_b: u32,
    pub winner: Option<Competitor>,
    /// Match number in the next round; None only for the final
    pub advances_to_match_number: Option<u32>,
}

impl Match {
    /// True when exactly one side is a bye and the other a real competitor.
    pub fn is_bye(&self) -> bool {
        match (&self.slot_a, &self.slot_b) {
            (Slot::Competitor(_), Slot::Bye) | (Slot::Bye, Slot::Competitor(_)) => true,
            _ => false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn competitor_ids(&self) -> impl Iterator<Item = CompetitorId> + '_ {
        self.slot_a
            .competitor_id()
            .into_iter()
            .chain(self.slot_b.competitor_id())
    }
}

/// One round of the bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round_number: u32,
    pub round_name: String,
    pub matches: Vec<Match>,
}

/// A complete single-elimination bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub total_rounds: u32,
    /// Smallest power of two that fits every competitor
    pub bracket_size: usize,
    pub total_competitors: usize,
    pub seeding_method: SeedingMethod,
    pub stage_id: StageId,
    pub group_id: Option<GroupId>,
    /// Ordered by round number, ascending
    pub rounds: Vec<Round>,
}

impl Bracket {
    pub fn round(&self, round_number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.round_number == round_number)
    }

    pub fn first_round(&self) -> Option<&Round> {
        self.rounds.first()
    }

    pub fn final_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    /// Round-1 matches decided by a bye
    pub fn byes(&self) -> impl Iterator<Item = &Match> {
        self.rounds
            .iter()
            .take(1)
            .flat_map(|r| r.matches.iter())
            .filter(|m| m.is_bye())
    }

    /// Text preview of the bracket, one block per round
    pub fn render_preview(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Bracket: {} competitors, size {}, {} rounds ({}) ===\n",
            self.total_competitors, self.bracket_size, self.total_rounds, self.seeding_method
        ));

        for round in &self.rounds {
            report.push_str(&format!("\n{} (round {})\n", round.round_name, round.round_number));
            report.push_str(&"-".repeat(60));
            report.push('\n');
            for m in &round.matches {
                let next = match m.advances_to_match_number {
                    Some(n) => format!("-> M{}", n),
                    None => String::new(),
                };
                let winner = match &m.winner {
                    Some(w) => format!("[{}]", w.name),
                    None => String::new(),
                };
                report.push_str(&format!(
                    "M{:<3} {:<20} vs {:<20} {:<8} {}\n",
                    m.match_number,
                    m.slot_a.label(),
                    m.slot_b.label(),
                    next,
                    winner
                ));
            }
        }

        report
    }
}
