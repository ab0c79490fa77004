//! Round progression over loss-count tranches.
//!
//! Tranches are resolved in increasing loss order. An odd tranche borrows
//! one competitor from the nearest later tranche that still has anyone in
//! it; that borrow is taken off a working copy, so the donor's own split
//! sees the reduced count. With no donor left the odd competitor gets a bye.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Distribution, TieBreak, TieBreakSource, TrancheCounts};

/// Result of a mismatched pairing between an odd tranche and its donor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MismatchOutcome {
    /// The competitor with fewer losses won.
    HigherRankedWon,
    /// The borrowed competitor with more losses won.
    LowerRankedWon,
}

impl MismatchOutcome {
    fn decide(tie_break: TieBreak, source: &mut dyn TieBreakSource) -> Self {
        let higher_wins = match tie_break {
            TieBreak::BestCase => true,
            TieBreak::WorstCase => false,
            TieBreak::Random => source.higher_ranked_wins(),
        };
        if higher_wins {
            Self::HigherRankedWon
        } else {
            Self::LowerRankedWon
        }
    }
}

/// How a single tranche was paired in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrancheResolution {
    /// Even population, split in half.
    Split { losses: usize, population: u32 },
    /// Odd population with no later tranche to borrow from.
    Bye { losses: usize, population: u32 },
    /// Odd population paired its leftover against a competitor from `donor`.
    Borrow {
        losses: usize,
        population: u32,
        donor: usize,
        outcome: MismatchOutcome,
    },
}

/// Per-tranche record of one round.
pub type RoundTrace = SmallVec<[TrancheResolution; 16]>;

/// Compute the next round's distribution.
///
/// The result has one more tranche than `current` and the same total.
/// Every output tranche is bounded by that total, which `Distribution`
/// caps at `u32::MAX`.
///
/// ```
/// use swiss_draw::core::{Distribution, ScriptedSource, TieBreak};
/// use swiss_draw::tranche::advance;
///
/// let mut source = ScriptedSource::default();
/// let current = Distribution::try_from([7, 7]).unwrap();
/// let next = advance(&current, TieBreak::BestCase, &mut source);
/// assert_eq!(next, [4, 6, 4]);
/// ```
pub fn advance(
    current: &Distribution,
    tie_break: TieBreak,
    source: &mut dyn TieBreakSource,
) -> Distribution {
    advance_traced(current, tie_break, source).0
}

/// Like [`advance`], also returning how each tranche was resolved.
pub fn advance_traced(
    current: &Distribution,
    tie_break: TieBreak,
    source: &mut dyn TieBreakSource,
) -> (Distribution, RoundTrace) {
    let mut working: TrancheCounts = current.as_slice().into();
    let mut next: TrancheCounts = smallvec::smallvec![0; working.len() + 1];
    let mut resolutions = RoundTrace::new();

    for losses in 0..working.len() {
        let population = working[losses];
        let half = population / 2;

        if population % 2 == 0 {
            next[losses] += half;
            next[losses + 1] += half;
            resolutions.push(TrancheResolution::Split { losses, population });
            continue;
        }

        let Some(donor) = find_donor(&working, losses) else {
            next[losses] += half + 1;
            next[losses + 1] += half;
            trace!("tranche {losses}: {population} with bye");
            resolutions.push(TrancheResolution::Bye { losses, population });
            continue;
        };

        working[donor] -= 1;

        let outcome = MismatchOutcome::decide(tie_break, source);
        match outcome {
            MismatchOutcome::LowerRankedWon => {
                next[losses] += half;
                next[losses + 1] += half + 2;
            }
            MismatchOutcome::HigherRankedWon => {
                next[losses] += half + 1;
                next[losses + 1] += half;
                next[losses + 2] += 1;
            }
        }
        trace!("tranche {losses}: {population} borrowed from tranche {donor}, {outcome:?}");
        resolutions.push(TrancheResolution::Borrow {
            losses,
            population,
            donor,
            outcome,
        });
    }

    (Distribution::from_conserved(next), resolutions)
}

/// Nearest tranche after `losses` that still has someone to lend.
fn find_donor(working: &[u32], losses: usize) -> Option<usize> {
    working
        .iter()
        .enumerate()
        .skip(losses + 1)
        .find(|&(_, &count)| count > 0)
        .map(|(idx, _)| idx)
}
