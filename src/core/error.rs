//! Input errors.
//!
//! These never escape the state machine as failures; they explain why a
//! snapshot carries `valid == false`.

use thiserror::Error;

/// Why a participant-count input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantInputError {
    #[error("participant count is empty")]
    Empty,
    #[error("participant count {input:?} is not an integer")]
    NotAnInteger { input: String },
    #[error("participant count must be positive (got {value})")]
    NotPositive { value: i64 },
    #[error("participant count {value} exceeds the supported maximum of {max}")]
    TooLarge { value: i64, max: u32 },
}

/// Why a list of tranche counts cannot form a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("distribution total {total} exceeds the supported maximum of {max}")]
    PopulationOverflow { total: u64, max: u32 },
}

/// Unknown tie-break label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tie-break {0:?} (expected sometimes, always or never)")]
pub struct TieBreakParseError(pub String);

/// Parse raw participant-count text.
///
/// Surrounding whitespace is ignored. The value must be an integer `> 0`.
///
/// # Errors
///
/// Returns `ParticipantInputError` when the text is empty, not an integer,
/// not positive, or does not fit in a `u32`.
///
/// ```
/// use swiss_draw::core::{parse_participants, ParticipantInputError};
///
/// assert_eq!(parse_participants(" 36 "), Ok(36));
/// assert_eq!(parse_participants(""), Err(ParticipantInputError::Empty));
/// ```
pub fn parse_participants(raw: &str) -> Result<u32, ParticipantInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParticipantInputError::Empty);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| ParticipantInputError::NotAnInteger {
            input: raw.to_string(),
        })?;

    if value <= 0 {
        return Err(ParticipantInputError::NotPositive { value });
    }

    u32::try_from(value).map_err(|_| ParticipantInputError::TooLarge {
        value,
        max: u32::MAX,
    })
}
