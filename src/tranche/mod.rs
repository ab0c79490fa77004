//! Tranche engine: computes each round's loss-count distribution.
//!
//! ## Resolution rules
//!
//! - Even tranche: half win, half lose
//! - Odd tranche with a donor: the leftover plays someone from the nearest
//!   later non-empty tranche, decided by `TieBreak`
//! - Odd tranche without a donor: the leftover takes a bye

pub mod engine;

pub use engine::{advance, advance_traced, MismatchOutcome, RoundTrace, TrancheResolution};
