//! Core types: move identifiers, the ordered move set, and the RNG.
//!
//! These building blocks know nothing about rules text. The rule compiler
//! fills a `MoveSet`; the round engine and sessions draw from a `GameRng`.

pub mod moves;
pub mod rng;

pub use moves::{MoveId, MoveSet, MAX_MOVES};
pub use rng::{GameRng, GameRngState};
