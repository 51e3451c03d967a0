//! Deterministic RNG for the game simulations.
//!
//! A small LCG using the Numerical Recipes constants. Every game owns one,
//! seeded at mount, so a whole play session can be replayed step by step in
//! tests. The host seeds each mount from the system RNG for variety.

#[derive(Debug, Clone)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would produce an all-zero opening sequence.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next raw u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits keep the full f32 mantissa precision.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[lo, hi)`.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// True with probability `p` (clamped to `0.0..=1.0` by construction of
    /// `next_f32`).
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// Current internal state, exposed so a session can be resumed or logged.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}
