//! Lightweight xorshift32 PRNG: the benchmark's only source of randomness

/// Deterministic 32-bit xorshift generator
#[derive(Debug, Clone)]
pub struct BenchRng {
    state: u32,
}

impl BenchRng {
    pub fn new(seed: u32) -> Self {
        Self {
            // Zero is a fixed point of xorshift
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns an integer in `[0, n)`. `n` must be non-zero.
    pub fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}
