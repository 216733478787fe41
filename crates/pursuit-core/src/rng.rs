//! Deterministic RNG helpers.
//!
//! Small and dependency-free so replays stay bit-identical across platforms.
//! Not cryptographic.

/// SplitMix64: small deterministic generator, also a good seed mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }

    /// Uniform draw in `[0, n)` via the multiply-shift reduction.
    ///
    /// The reduction bias is below 2^-64 per draw, which is irrelevant for
    /// tie-breaking among a handful of actions.
    pub fn next_below(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0, "empty range");
        ((self.next_u64() as u128 * n as u128) >> 64) as u64
    }
}

fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Derive a per-agent stream seed from a match-global seed.
///
/// Distinct `(agent, stream)` pairs yield statistically independent streams,
/// so teammates sharing one match seed never consume each other's draws.
pub fn derive_seed(global_seed: u64, agent_id: u64, stream: u64) -> u64 {
    let x = global_seed
        ^ mix64(agent_id.wrapping_add(0x9E3779B97F4A7C15))
        ^ mix64(stream);
    mix64(x)
}
