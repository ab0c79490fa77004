//! Commands accepted by the draw state machine.

use serde::{Deserialize, Serialize};

use crate::core::TieBreak;

/// One user action against a `DrawState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Raw participant-count text as typed.
    ChangeParticipants(String),
    /// New tie-break policy.
    ChangeTieBreak(TieBreak),
    /// Advance one round.
    IncrementRound,
    /// Go back one round.
    DecrementRound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let cmd = DrawCommand::ChangeTieBreak(TieBreak::WorstCase);
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}
