//! First-round pairing using standard bracket seeding.
//!
//! Seed 1 meets the last slot, seed 2 the second-to-last, and so on. Empty
//! slots at the bottom of the bracket are byes, so the top seeds get them.

use serde::{Deserialize, Serialize};

use crate::error::BracketError;
use crate::round_math::bracket_size;
use crate::types::{Competitor, Slot};

/// Two first-round slots that meet each other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub slot_a: Slot,
    pub slot_b: Slot,
}

impl Pairing {
    /// The competitor that advances without playing, if this pairing is a bye.
    pub fn bye_winner(&self) -> Option<&Competitor> {
        match (&self.slot_a, &self.slot_b) {
            (Slot::Competitor(c), Slot::Bye) | (Slot::Bye, Slot::Competitor(c)) => Some(c),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.bye_winner().is_some()
    }
}

/// Pair a seeded roster into `bracket_size(n) / 2` first-round pairings.
pub fn pair(seeded: &[Competitor]) -> Result<Vec<Pairing>, BracketError> {
    let size = bracket_size(seeded.len())?;

    let slots: Vec<Slot> = (0..size)
        .map(|i| match seeded.get(i) {
            Some(c) => Slot::Competitor(c.clone()),
            None => Slot::Bye,
        })
        .collect();

    let pairings: Vec<Pairing> = (0..size / 2)
        .map(|i| Pairing {
            slot_a: slots[i].clone(),
            slot_b: slots[size - 1 - i].clone(),
        })
        .collect();

    tracing::debug!(
        bracket_size = size,
        pairings = pairings.len(),
        byes = size - seeded.len().min(size),
        "paired first round"
    );
    Ok(pairings)
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
