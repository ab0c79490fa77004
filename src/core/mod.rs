//! Core draw types: distributions, configuration, input errors, RNG.
//!
//! These are the building blocks shared by the tranche engine and the
//! draw state machine.

pub mod config;
pub mod distribution;
pub mod error;
pub mod rng;

pub use config::{DrawConfig, TieBreak};
pub use distribution::{Distribution, TrancheCounts};
pub use error::{
    parse_participants, DistributionError, ParticipantInputError, TieBreakParseError,
};
pub use rng::{DrawRng, ScriptedSource, TieBreakSource};
