//! Bracket generation core
//!
//! Everything needed to turn a roster into a single-elimination bracket:
//! - Round arithmetic (rounds needed, bracket size, round names)
//! - Seeding policies (sequential or random with an injected RNG)
//! - Standard first-round pairing with byes for the top seeds
//! - Full round skeletons with TBD placeholders for later rounds
//! - Submission-ready match records for the persistence layer
//!
//! All of it is pure computation: no I/O and no shared state.

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod materialize;
pub mod pairing;
pub mod round_math;
pub mod seeding;
pub mod types;
pub mod validation;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use materialize::*;
pub use pairing::*;
pub use round_math::*;
pub use seeding::*;
pub use types::*;
pub use validation::*;
