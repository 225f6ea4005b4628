// src/rng.rs
//! Random Number Generation for Price-Path Simulation
//!
//! # Design
//!
//! Path generation must be bit-for-bit reproducible from a seed. The engine
//! therefore owns its generator instead of relying on whatever `StdRng`
//! happens to be in the current `rand` release:
//! 1. **Reproducibility**: same seed → same stream, independent of `rand` upgrades
//! 2. **Isolation**: one generator per top-level call, never shared
//! 3. **Performance**: a handful of integer ops per draw
//!
//! # SplitMix64
//!
//! Counter-based generator with a golden-ratio increment:
//! ```text
//! state = state + 0x9e3779b97f4a7c15
//! z = (state ⊕ (state >> 30)) * 0xbf58476d1ce4e5b9
//! z = (z ⊕ (z >> 27)) * 0x94d049bb133111eb
//! output = z ⊕ (z >> 31)
//! ```
//!
//! # Box-Muller Transform
//!
//! Converts two uniforms to one standard normal:
//! ```text
//! Z = √(-2ln(U₁)) * cos(2πU₂)
//! ```
//! where U₁, U₂ ~ Uniform(0,1]. The sine companion is discarded so every
//! normal consumes exactly two uniforms.

use rand::{Rng, RngCore, SeedableRng};
use rand_distr::Distribution;
use std::f64::consts::PI;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// 2^-53, the spacing of the 53-bit uniform grid
const UNIFORM_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Seedable SplitMix64 generator used as the engine's random source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    // The default implementation scrambles the seed through PCG32; the
    // state is taken verbatim instead so seeds map one-to-one onto streams.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Create the random source for one top-level call
///
/// `Some(seed)` gives a deterministic stream, `None` draws the initial state
/// from operating-system entropy.
pub fn source_from_seed(seed: Option<u64>) -> SplitMix64 {
    match seed {
        Some(s) => SplitMix64::seed_from_u64(s),
        None => SplitMix64::from_entropy(),
    }
}

/// Uniform draw in [0, 1) from the top 53 bits of `next_u64`
#[inline]
pub fn raw_uniform<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * UNIFORM_SCALE
}

/// Uniform draw in (0, 1], safe to pass to `ln`
#[inline]
pub fn open_closed_uniform<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    1.0 - raw_uniform(rng)
}

/// Standard normal distribution sampled with the Box-Muller cosine branch
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxMuller;

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u1 = open_closed_uniform(rng);
        let u2 = open_closed_uniform(rng);
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}

/// Draw a single standard normal variate
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    BoxMuller.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix_reference_output() {
        // First outputs of the reference SplitMix64 for seeds 0 and 42
        let mut rng = SplitMix64::seed_from_u64(0);
        assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);

        let mut rng = SplitMix64::seed_from_u64(42);
        assert_eq!(rng.next_u64(), 13_679_457_532_755_275_413);
    }

    #[test]
    fn test_seeded_reproducibility() {
        let mut rng1 = source_from_seed(Some(42));
        let mut rng2 = source_from_seed(Some(42));

        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = source_from_seed(Some(1));
        let mut rng2 = source_from_seed(Some(2));

        let vals1: Vec<u64> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<u64> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_from_seed_matches_seed_from_u64() {
        let a = SplitMix64::from_seed(7u64.to_le_bytes());
        let b = SplitMix64::seed_from_u64(7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = SplitMix64::new(3);
        let mut expected = SplitMix64::new(3);
        let mut buf = [0u8; 11];
        rng.fill_bytes(&mut buf);

        let first = expected.next_u64().to_le_bytes();
        let second = expected.next_u64().to_le_bytes();
        assert_eq!(&buf[..8], &first);
        assert_eq!(&buf[8..], &second[..3]);
    }

    #[test]
    fn test_open_closed_uniform_bounds() {
        let mut rng = source_from_seed(Some(9));
        for _ in 0..10_000 {
            let u = open_closed_uniform(&mut rng);
            assert!(u > 0.0 && u <= 1.0, "u = {} outside (0, 1]", u);
        }
    }

    #[test]
    fn test_normal_distribution() {
        let mut rng = source_from_seed(Some(42));

        let samples: Vec<f64> = (0..20_000).map(|_| get_normal_draw(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

        assert!(mean.abs() < 0.05, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.05,
            "Variance should be close to 1, got {}",
            variance
        );
    }

    #[test]
    fn test_normal_consumes_two_uniforms() {
        let mut rng = source_from_seed(Some(5));
        let mut shadow = source_from_seed(Some(5));

        let _ = get_normal_draw(&mut rng);
        shadow.next_u64();
        shadow.next_u64();

        assert_eq!(rng, shadow);
    }
}
