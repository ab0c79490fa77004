//! Draw configuration types.
//!
//! - `TieBreak`: who wins when players with different records meet
//! - `DrawConfig`: participant count, its raw input, and the tie-break
//!
//! Any change to the configuration resets round progress; see
//! `crate::draw::DrawState`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{parse_participants, ParticipantInputError, TieBreakParseError};

/// How a mismatched pairing is decided when an odd tranche borrows an
/// opponent from the next tranche with more losses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// The higher-ranked side always wins ("always").
    BestCase,
    /// The higher-ranked side never wins ("never").
    WorstCase,
    /// Each mismatch is a coin flip ("sometimes").
    #[default]
    Random,
}

impl TieBreak {
    /// All policies, in selector order.
    pub const ALL: [TieBreak; 3] = [TieBreak::Random, TieBreak::BestCase, TieBreak::WorstCase];

    /// Caller-facing label describing whether the higher-ranked side wins.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TieBreak::Random => "sometimes",
            TieBreak::BestCase => "always",
            TieBreak::WorstCase => "never",
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TieBreak {
    type Err = TieBreakParseError;

    /// Accepts a label (`sometimes`) or a variant name (`Random`), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|tb| {
                needle.eq_ignore_ascii_case(tb.label())
                    || needle.eq_ignore_ascii_case(&format!("{tb:?}"))
            })
            .ok_or_else(|| TieBreakParseError(s.to_string()))
    }
}

/// Participant count plus tie-break policy.
///
/// `participant_input` always holds exactly what was last typed, even when
/// it failed to parse. In that case `valid` is false and `participants`
/// keeps the last valid count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Competitors entering round 1.
    pub participants: u32,

    /// Raw participant-count text.
    pub participant_input: String,

    /// Whether `participant_input` is a positive integer.
    pub valid: bool,

    /// Mismatched-pairing policy.
    pub tie_break: TieBreak,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self::new(32)
    }
}

impl DrawConfig {
    /// Create a valid config for `participants` with the `Random` tie-break.
    #[must_use]
    pub fn new(participants: u32) -> Self {
        Self {
            participants,
            participant_input: participants.to_string(),
            valid: participants > 0,
            tie_break: TieBreak::default(),
        }
    }

    /// Set the tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Apply raw participant input.
    ///
    /// The raw text is stored verbatim; on a parse failure the previous
    /// participant count is kept and the error is returned alongside.
    #[must_use]
    pub fn with_participant_input(
        mut self,
        raw: impl Into<String>,
    ) -> (Self, Option<ParticipantInputError>) {
        self.participant_input = raw.into();
        match parse_participants(&self.participant_input) {
            Ok(participants) => {
                self.participants = participants;
                self.valid = true;
                (self, None)
            }
            Err(err) => {
                self.valid = false;
                (self, Some(err))
            }
        }
    }
}
