//! Draw state machine.
//!
//! Four commands drive a `DrawState`:
//! - `ChangeParticipants` / `ChangeTieBreak`: full reset to round 1
//! - `IncrementRound`: archive the current distribution, advance it
//! - `DecrementRound`: restore the previous distribution (no-op at round 1)
//!
//! `DrawSession` bundles a state with its RNG for callers that want one
//! mutable handle instead of threading snapshots themselves.

pub mod command;
pub mod session;
pub mod state;

pub use command::DrawCommand;
pub use session::DrawSession;
pub use state::{DrawState, RoundState};
