//! Monte Carlo estimation of the average run length.
//!
//! Each trial draws a fresh outcome sequence of `n` subjects at the given failure
//! rate, walks it through [`crate::path`], and records the first 1-based index at
//! which the score exceeds `h` (or `n` when it never does). The ARL is the mean
//! over trials.
//!
//! Runs that reach `n` without a crossing are *censored*: their true run length
//! is at least `n`, so the mean is biased low when the censored fraction is
//! large. [`ArlEstimate`] reports that fraction.

use rand::Rng;
use tracing::debug;

use crate::outcome::SamplingScheme;
use crate::path::first_crossing;
use crate::stats::{mean_sd, wilson_interval};
use crate::{Error, Weights};

/// One trial: draw a sequence and walk it. `None` means the walk never crossed `h`.
fn run_trial<R: Rng + ?Sized>(
    rng: &mut R,
    h: f64,
    weights: Weights,
    failure_rate: f64,
    n: usize,
    scheme: SamplingScheme,
) -> Result<Option<usize>, Error> {
    let seq = scheme.sample(rng, n, failure_rate)?;
    first_crossing(&seq, weights, h)
}

/// Run length of every trial, in trial order.
pub fn simulate_run_lengths<R: Rng + ?Sized>(
    rng: &mut R,
    h: f64,
    weights: Weights,
    failure_rate: f64,
    trials: usize,
    n: usize,
    scheme: SamplingScheme,
) -> Result<Vec<usize>, Error> {
    (0..trials)
        .map(|_| run_trial(rng, h, weights, failure_rate, n, scheme).map(|c| c.unwrap_or(n)))
        .collect()
}

/// Average run length over `trials` fixed-count sequences of length `n`.
///
/// Errors with [`Error::NoTrials`] when `trials == 0`. For `n >= 1` the result
/// lies in `[1, n]`.
pub fn estimate_arl<R: Rng + ?Sized>(
    rng: &mut R,
    h: f64,
    weights: Weights,
    failure_rate: f64,
    trials: usize,
    n: usize,
) -> Result<f64, Error> {
    let est = estimate_arl_detailed(
        rng,
        h,
        weights,
        failure_rate,
        trials,
        n,
        SamplingScheme::FixedCount,
    )?;
    Ok(est.mean)
}

/// Summary of a run-length sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArlEstimate {
    /// Failure rate the sequences were drawn at.
    pub failure_rate: f64,
    /// Mean run length (the ARL).
    pub mean: f64,
    /// Sample standard deviation of the run lengths.
    pub sd: f64,
    pub min: usize,
    pub max: usize,
    pub trials: usize,
    /// Subjects per trial (the censoring point).
    pub subjects: usize,
    /// Trials whose score never exceeded `h`.
    pub censored: usize,
}

impl ArlEstimate {
    /// Summarize run lengths from [`simulate_run_lengths`].
    ///
    /// The run length alone cannot tell a censored trial from a crossing at
    /// exactly `n`, so callers pass the censored count they observed.
    pub fn from_run_lengths(
        failure_rate: f64,
        run_lengths: &[usize],
        subjects: usize,
        censored: usize,
    ) -> Result<Self, Error> {
        let (mean, sd) = mean_sd(run_lengths).ok_or(Error::NoTrials)?;
        let min = run_lengths.iter().copied().min().unwrap_or(0);
        let max = run_lengths.iter().copied().max().unwrap_or(0);
        Ok(Self {
            failure_rate,
            mean,
            sd,
            min,
            max,
            trials: run_lengths.len(),
            subjects,
            censored: censored.min(run_lengths.len()),
        })
    }

    /// Standard error of the mean.
    pub fn std_error(&self) -> f64 {
        if self.trials == 0 {
            return f64::NAN;
        }
        self.sd / (self.trials as f64).sqrt()
    }

    /// Normal-approximation interval `mean ± z * std_error`, clamped to
    /// `[1, subjects]`.
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let z = if z.is_finite() && z > 0.0 { z } else { 1.96 };
        let half = z * self.std_error();
        let hi_cap = self.subjects.max(1) as f64;
        let lo = (self.mean - half).clamp(1.0, hi_cap);
        let hi = (self.mean + half).clamp(1.0, hi_cap);
        (lo, hi)
    }

    /// Fraction of censored trials.
    pub fn censored_fraction(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.censored as f64 / self.trials as f64
    }

    /// Wilson `(lower, upper)` bounds on the censored fraction.
    pub fn censored_wilson(&self, z: f64) -> (f64, f64) {
        wilson_interval(self.censored, self.trials, z)
    }
}

/// Simulate and summarize in one pass, tracking censoring exactly.
pub fn estimate_arl_detailed<R: Rng + ?Sized>(
    rng: &mut R,
    h: f64,
    weights: Weights,
    failure_rate: f64,
    trials: usize,
    n: usize,
    scheme: SamplingScheme,
) -> Result<ArlEstimate, Error> {
    if trials == 0 {
        return Err(Error::NoTrials);
    }
    let mut lengths = Vec::with_capacity(trials);
    let mut censored = 0usize;
    for _ in 0..trials {
        match run_trial(rng, h, weights, failure_rate, n, scheme)? {
            Some(rl) => lengths.push(rl),
            None => {
                censored += 1;
                lengths.push(n);
            }
        }
    }
    let est = ArlEstimate::from_run_lengths(failure_rate, &lengths, n, censored)?;
    debug!(
        failure_rate,
        h,
        trials,
        n,
        arl = est.mean,
        sd = est.sd,
        censored,
        "estimated average run length"
    );
    Ok(est)
}
