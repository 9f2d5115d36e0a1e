//! Bracket CLI support for the tournament runner
//!
//! This crate wraps `bracket_core` with everything that touches the outside world:
//! - Loading rosters (JSON) and generator configs (TOML)
//! - Writing bracket exports and submission-ready match records
//! - Text previews of generated brackets
//!
//! # Usage
//!
//! ```bash
//! # Seed 12 teams at random, best-of-3, and write the records
//! cargo run -p tournament -- generate --roster teams.json --seeding random --seed 7 --best-of 3 --output cup.json
//!
//! # Print a saved bracket again
//! cargo run -p tournament -- preview cup.json
//! ```

mod export;

pub use export::*;
