//! Random sources for peg colors.

// Bounded draws narrow a u64 remainder that is already below a usize bound
#![allow(clippy::cast_possible_truncation)]

/// Seed used when none is given, the one the game has always started with.
pub const DEFAULT_SEED: u64 = 345_345_345;

/// A source of pseudo-random numbers, owned by the board that draws from it.
pub trait RandomSource {
    /// Generate the next random u64.
    fn next_u64(&mut self) -> u64;

    /// Generate a random value in `[0, bound)`. Returns 0 for a zero bound.
    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }
}

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        // xorshift never leaves the zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for XorShift64 {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}
