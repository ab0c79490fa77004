//! Entropy sources for the `Random` tie-break.
//!
//! ## Key Features
//!
//! - **Injectable**: the tranche engine only sees `dyn TieBreakSource`
//! - **Deterministic**: same seed produces identical tie-break decisions
//! - **Scriptable**: `ScriptedSource` replays a fixed decision sequence
//!
//! ```
//! use swiss_draw::core::{DrawRng, TieBreakSource};
//!
//! let mut a = DrawRng::new(42);
//! let mut b = DrawRng::new(42);
//!
//! for _ in 0..16 {
//!     assert_eq!(a.higher_ranked_wins(), b.higher_ranked_wins());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of coin flips deciding mismatched pairings under `TieBreak::Random`.
pub trait TieBreakSource {
    /// Returns `true` when the higher-ranked (fewer losses) side wins.
    fn higher_ranked_wins(&mut self) -> bool;
}

/// Seeded RNG used as the production tie-break source.
///
/// Uses ChaCha8 for speed; the seed is kept so a run can be replayed.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DrawRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

impl Default for DrawRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl TieBreakSource for DrawRng {
    fn higher_ranked_wins(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of decisions, cycling when exhausted.
///
/// An empty script always answers `true`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<bool>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that replays `script` in order.
    pub fn new(script: impl Into<Vec<bool>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of decisions handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl TieBreakSource for ScriptedSource {
    fn higher_ranked_wins(&mut self) -> bool {
        let decision = if self.script.is_empty() {
            true
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        decision
    }
}
