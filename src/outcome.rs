//! Random binary outcome sequences.
//!
//! A `1` in a generated sequence is a *failure* drawn at `rate`; the walk in
//! [`crate::path`] then scores it with `wt1`. See the crate docs for the
//! convention this implies.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use crate::Error;

/// How the ones in a simulated sequence are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingScheme {
    /// Exactly `floor(n * rate)` ones, uniformly permuted.
    #[default]
    FixedCount,
    /// Each position independently 1 with probability `rate`.
    Bernoulli,
}

/// Clamp a rate into `[0, 1]`; NaN maps to 0.
fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}

/// Number of ones a fixed-count sequence of length `n` carries at `rate`.
pub fn ones_for(n: usize, rate: f64) -> usize {
    // Truncation; the product is non-negative after clamping.
    ((n as f64) * clamp_rate(rate)) as usize
}

/// Length-`n` sequence with exactly [`ones_for`]`(n, rate)` ones, shuffled.
pub fn generate_outcomes<R: Rng + ?Sized>(rng: &mut R, n: usize, rate: f64) -> Vec<u8> {
    let ones = ones_for(n, rate).min(n);
    let mut v = vec![0u8; n - ones];
    v.resize(n, 1);
    v.shuffle(rng);
    v
}

/// Length-`n` sequence with i.i.d. Bernoulli(`rate`) entries.
pub fn generate_outcomes_iid<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    rate: f64,
) -> Result<Vec<u8>, Error> {
    let dist = Bernoulli::new(clamp_rate(rate))
        .map_err(|_| Error::Domain("bernoulli rate must lie in [0, 1]"))?;
    Ok((0..n).map(|_| u8::from(dist.sample(rng))).collect())
}

impl SamplingScheme {
    /// Draw one sequence under this scheme.
    pub fn sample<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        n: usize,
        rate: f64,
    ) -> Result<Vec<u8>, Error> {
        match self {
            SamplingScheme::FixedCount => Ok(generate_outcomes(rng, n, rate)),
            SamplingScheme::Bernoulli => generate_outcomes_iid(rng, n, rate),
        }
    }
}
