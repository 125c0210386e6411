//! Deterministic seeded number stream.
//!
//! A linear congruential generator: same seed, same sequence, no external
//! entropy. This is a fairness device for shuffling quiz content, NOT a
//! cryptographically secure generator.

const LCG_MULTIPLIER: i64 = 1_103_515_245;
const LCG_INCREMENT: i64 = 12_345;
const LCG_MASK: i64 = 0x7fff_ffff; // 2^31 - 1, keeps state non-negative

/// Seeded pseudo-random stream with explicit owned state.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed & LCG_MASK,
        }
    }

    /// Next value in [0, 1]. The upper bound is inclusive in the rare case
    /// the state lands exactly on the modulus mask; index arithmetic built
    /// on this stream must clamp accordingly.
    pub fn next_value(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state as f64 / LCG_MASK as f64
    }

    /// Restarts the stream from `seed`, discarding current state.
    pub fn reseed(&mut self, seed: i64) {
        self.state = seed & LCG_MASK;
    }
}
