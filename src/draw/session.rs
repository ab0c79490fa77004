use super::command::DrawCommand;
use super::state::DrawState;
use crate::core::{DrawRng, TieBreakSource};
use crate::tranche::RoundTrace;

/// Single handle binding a draw state to the RNG that drives it.
#[derive(Debug, Clone)]
pub struct DrawSession {
    state: DrawState,
    rng: DrawRng,
    last_round: Option<RoundTrace>,
}

impl DrawSession {
    /// Fresh session for `participants`, seeded for replay.
    #[must_use]
    pub fn new(participants: u32, seed: u64) -> Self {
        Self::from_state(DrawState::new(participants), DrawRng::new(seed))
    }

    /// Fresh session for `participants`, seeded from the operating system.
    #[must_use]
    pub fn with_entropy(participants: u32) -> Self {
        Self::from_state(DrawState::new(participants), DrawRng::default())
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn from_state(state: DrawState, rng: DrawRng) -> Self {
        Self {
            state,
            rng,
            last_round: None,
        }
    }

    /// Apply a command and return the new snapshot.
    pub fn dispatch(&mut self, command: DrawCommand) -> &DrawState {
        self.state = match command {
            DrawCommand::IncrementRound => {
                let (next, resolutions) = self.state.advance_round_traced(&mut self.rng);
                self.last_round = Some(resolutions);
                next
            }
            other => {
                self.last_round = None;
                self.state.apply(other, &mut self.rng)
            }
        };
        &self.state
    }

    /// Borrow the current snapshot.
    #[must_use]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// How each tranche resolved in the most recent advance, if the last
    /// command was an advance.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundTrace> {
        self.last_round.as_ref()
    }

    /// Seed of the RNG driving `Random` tie-breaks.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Deterministically reseed. Round progress is kept.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = DrawRng::new(seed);
    }

    /// Borrow the RNG as a tie-break source.
    pub fn source_mut(&mut self) -> &mut dyn TieBreakSource {
        &mut self.rng
    }
}
