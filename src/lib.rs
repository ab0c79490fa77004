//! # swiss-draw
//!
//! Round-by-round model of how a Swiss-system field splits into tranches by
//! number of losses. Only head counts per tranche are tracked; no individual
//! competitors or pairings are simulated.
//!
//! ## Design Principles
//!
//! 1. **Population Conserved**: every round redistributes, nobody is
//!    eliminated. A distribution always sums to the participant count.
//!
//! 2. **Snapshots, Not Globals**: `DrawState` transitions take `&self` and
//!    return a new state. History is an `im::Vector`, so clones are O(1).
//!
//! 3. **Injectable Entropy**: the `Random` tie-break draws from a
//!    `TieBreakSource`, so runs can be seeded or scripted.
//!
//! ## Modules
//!
//! - `core`: distributions, configuration, input errors, RNG
//! - `tranche`: the per-round tranche engine
//! - `draw`: the draw state machine and session wrapper
//!
//! ```
//! use swiss_draw::{DrawCommand, DrawSession};
//!
//! let mut session = DrawSession::new(7, 42);
//! session.dispatch(DrawCommand::IncrementRound);
//! let state = session.dispatch(DrawCommand::IncrementRound);
//! assert_eq!(*state.tranches(), [2, 4, 1]);
//! ```

pub mod core;
pub mod draw;
pub mod tranche;

// Re-export commonly used types
pub use crate::core::{
    parse_participants, Distribution, DistributionError, DrawConfig, DrawRng,
    ParticipantInputError, ScriptedSource, TieBreak, TieBreakParseError, TieBreakSource,
};

pub use crate::tranche::{advance, advance_traced, MismatchOutcome, RoundTrace, TrancheResolution};

pub use crate::draw::{DrawCommand, DrawSession, DrawState, RoundState};
