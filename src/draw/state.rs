//! Draw state snapshots.
//!
//! ## DrawState
//!
//! - Configuration (participants, raw input, tie-break)
//! - Round number, current distribution, prior distributions
//!
//! Every transition takes `&self` and returns a new snapshot. History uses
//! `im::Vector`, so snapshots share structure and clone in O(1).

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use super::command::DrawCommand;
use crate::core::{Distribution, DrawConfig, TieBreak, TieBreakSource};
use crate::tranche::{self, RoundTrace};

/// Round progress: number, current distribution, and the ones before it.
///
/// Invariant: `prior.len() == round - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Round number (starts at 1).
    pub round: u32,

    /// Distribution entering this round.
    pub tranches: Distribution,

    /// Distributions of earlier rounds, oldest first.
    pub prior: Vector<Distribution>,
}

impl RoundState {
    /// Round 1 with everyone undefeated.
    #[must_use]
    pub fn initial(participants: u32) -> Self {
        Self {
            round: 1,
            tranches: Distribution::initial(participants),
            prior: Vector::new(),
        }
    }
}

/// Complete draw state handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawState {
    /// Participant count and tie-break.
    pub config: DrawConfig,

    /// Round progress under that configuration.
    pub current: RoundState,
}

impl Default for DrawState {
    fn default() -> Self {
        Self::from_config(DrawConfig::default())
    }
}

impl DrawState {
    /// Fresh state for `participants` with the `Random` tie-break.
    #[must_use]
    pub fn new(participants: u32) -> Self {
        Self::from_config(DrawConfig::new(participants))
    }

    /// Fresh state at round 1 for an existing configuration.
    #[must_use]
    pub fn from_config(config: DrawConfig) -> Self {
        let current = RoundState::initial(config.participants);
        Self { config, current }
    }

    /// Current round number.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.current.round
    }

    /// Current distribution.
    #[must_use]
    pub fn tranches(&self) -> &Distribution {
        &self.current.tranches
    }

    /// Whether the participant input is usable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.config.valid
    }

    /// Apply a command, returning the next snapshot.
    #[must_use]
    pub fn apply(&self, command: DrawCommand, source: &mut dyn TieBreakSource) -> Self {
        match command {
            DrawCommand::ChangeParticipants(raw) => self.set_participant_count(raw),
            DrawCommand::ChangeTieBreak(tie_break) => self.set_tie_break(tie_break),
            DrawCommand::IncrementRound => self.advance_round(source),
            DrawCommand::DecrementRound => self.revert_round(),
        }
    }

    /// Store the raw participant input and reset to round 1.
    ///
    /// Invalid input marks the config invalid and keeps the last valid count.
    #[must_use]
    pub fn set_participant_count(&self, raw: impl Into<String>) -> Self {
        let (config, err) = self.config.clone().with_participant_input(raw);
        if let Some(err) = err {
            debug!("participant input rejected: {err}");
        }
        debug!(
            "reset to {} participants (valid: {})",
            config.participants, config.valid
        );
        Self::from_config(config)
    }

    /// Switch tie-break policy and reset to round 1.
    #[must_use]
    pub fn set_tie_break(&self, tie_break: TieBreak) -> Self {
        debug!("tie-break set to {tie_break:?}, resetting");
        Self::from_config(self.config.clone().with_tie_break(tie_break))
    }

    /// Play one more round.
    #[must_use]
    pub fn advance_round(&self, source: &mut dyn TieBreakSource) -> Self {
        self.advance_round_traced(source).0
    }

    /// Play one more round, also returning how each tranche was resolved.
    #[must_use]
    pub fn advance_round_traced(&self, source: &mut dyn TieBreakSource) -> (Self, RoundTrace) {
        let (tranches, resolutions) =
            tranche::advance_traced(&self.current.tranches, self.config.tie_break, source);

        let mut prior = self.current.prior.clone();
        prior.push_back(self.current.tranches.clone());

        let current = RoundState {
            round: self.current.round + 1,
            tranches,
            prior,
        };
        debug!("round {} -> {}: {}", self.current.round, current.round, current.tranches);

        let next = Self {
            config: self.config.clone(),
            current,
        };
        (next, resolutions)
    }

    /// Step back one round. No-op at round 1.
    #[must_use]
    pub fn revert_round(&self) -> Self {
        if self.current.round <= 1 {
            return self.clone();
        }

        let mut prior = self.current.prior.clone();
        let Some(tranches) = prior.pop_back() else {
            return self.clone();
        };

        debug!("round {} -> {}", self.current.round, self.current.round - 1);
        Self {
            config: self.config.clone(),
            current: RoundState {
                round: self.current.round - 1,
                tranches,
                prior,
            },
        }
    }
}
