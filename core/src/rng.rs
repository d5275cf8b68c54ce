//! Deterministic random number generation.
//!
//! RULE: Nothing in the core may call any platform RNG.
//! The simulator consumes randomness only through the UniformSource
//! capability, so tests can substitute seeded or scripted draws.
//!
//! Streams are derived deterministically from (master_seed XOR
//! stream_index). A sharded trial loop can hand each worker its own
//! stream without overlapping draws.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The one capability the simulator requires from its environment:
/// a uniform value in [0.0, 1.0) per draw.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// A named, deterministic draw source backed by PCG.
pub struct DrawRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl DrawRng {
    pub fn new(master_seed: u64) -> Self {
        Self::stream(master_seed, 0)
    }

    /// Derive the stream at `stream_index` from the master seed.
    /// The index must never change once assigned to a worker.
    pub fn stream(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "draws",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }
}

impl UniformSource for DrawRng {
    /// Roll a float in [0.0, 1.0) with 53 bits of precision.
    fn next_uniform(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
