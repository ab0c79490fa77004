//! Loss-count distribution.
//!
//! Entry `i` is the number of competitors with exactly `i` losses.
//!
//! The whole field must fit in a `u32`: construction from raw counts is
//! checked, so every tranche the engine produces fits as well.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::error::DistributionError;

/// Inline capacity; covers a dozen rounds without allocating.
pub type TrancheCounts = SmallVec<[u32; 16]>;

/// Population per loss-count tranche after some number of rounds.
///
/// Immutable once built; the tranche engine works on its own copy.
/// Invariant: `total() <= u32::MAX`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TrancheCounts", into = "TrancheCounts")]
pub struct Distribution(TrancheCounts);

impl Distribution {
    /// Round-1 distribution: everyone undefeated.
    #[must_use]
    pub fn initial(participants: u32) -> Self {
        Self(smallvec::smallvec![participants])
    }

    /// Build from counts already known to respect the population cap.
    pub(crate) fn from_conserved(counts: TrancheCounts) -> Self {
        debug_assert!(sum(&counts) <= u64::from(u32::MAX));
        Self(counts)
    }

    /// Number of tranches (losses `0..len`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no tranches at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Population summed over all tranches.
    #[must_use]
    pub fn total(&self) -> u64 {
        sum(&self.0)
    }

    /// Population of the tranche with `losses` losses, 0 when out of range.
    #[must_use]
    pub fn get(&self, losses: usize) -> u32 {
        self.0.get(losses).copied().unwrap_or(0)
    }

    /// Tranche counts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

fn sum(counts: &[u32]) -> u64 {
    counts.iter().map(|&c| u64::from(c)).sum()
}

impl TryFrom<TrancheCounts> for Distribution {
    type Error = DistributionError;

    fn try_from(counts: TrancheCounts) -> Result<Self, Self::Error> {
        let total = sum(&counts);
        if total > u64::from(u32::MAX) {
            return Err(DistributionError::PopulationOverflow {
                total,
                max: u32::MAX,
            });
        }
        Ok(Self(counts))
    }
}

impl TryFrom<&[u32]> for Distribution {
    type Error = DistributionError;

    fn try_from(counts: &[u32]) -> Result<Self, Self::Error> {
        Self::try_from(TrancheCounts::from(counts))
    }
}

impl TryFrom<Vec<u32>> for Distribution {
    type Error = DistributionError;

    fn try_from(counts: Vec<u32>) -> Result<Self, Self::Error> {
        Self::try_from(TrancheCounts::from_vec(counts))
    }
}

impl<const N: usize> TryFrom<[u32; N]> for Distribution {
    type Error = DistributionError;

    fn try_from(counts: [u32; N]) -> Result<Self, Self::Error> {
        Self::try_from(counts.as_slice())
    }
}

impl From<Distribution> for TrancheCounts {
    fn from(distribution: Distribution) -> Self {
        distribution.0
    }
}

impl Index<usize> for Distribution {
    type Output = u32;

    fn index(&self, losses: usize) -> &u32 {
        &self.0[losses]
    }
}

impl PartialEq<[u32]> for Distribution {
    fn eq(&self, other: &[u32]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[u32; N]> for Distribution {
    fn eq(&self, other: &[u32; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        let d = Distribution::initial(32);
        assert_eq!(d, [32]);
        assert_eq!(d.len(), 1);
        assert_eq!(d.total(), 32);
    }

    #[test]
    fn test_get_out_of_range() {
        let d = Distribution::try_from([8, 16, 8]).unwrap();
        assert_eq!(d.get(1), 16);
        assert_eq!(d.get(3), 0);
        assert_eq!(d[2], 8);
    }

    #[test]
    fn test_total_at_cap() {
        let d = Distribution::try_from([u32::MAX - 5, 5]).unwrap();
        assert_eq!(d.total(), u64::from(u32::MAX));
    }

    #[test]
    fn test_rejects_total_over_cap() {
        assert_eq!(
            Distribution::try_from([u32::MAX, u32::MAX]),
            Err(DistributionError::PopulationOverflow {
                total: 2 * u64::from(u32::MAX),
                max: u32::MAX,
            })
        );
        assert!(Distribution::try_from(vec![u32::MAX, 1]).is_err());
    }

    #[test]
    fn test_display() {
        let d = Distribution::try_from([1, 3, 3, 0]).unwrap();
        assert_eq!(d.to_string(), "[1, 3, 3, 0]");
    }

    #[test]
    fn test_serde_is_plain_array() {
        let d = Distribution::try_from([2, 4, 1]).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "[2,4,1]");
        let back: Distribution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_deserialize_rejects_total_over_cap() {
        let json = format!("[{}, 1]", u32::MAX);
        assert!(serde_json::from_str::<Distribution>(&json).is_err());
    }
}
