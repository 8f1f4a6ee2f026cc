//! Simulation parameters.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::outcome::SamplingScheme;
use crate::{Error, Weights};

/// Parse one real-valued answer (`p0`, `δ` or `h`); surrounding whitespace is ignored.
pub fn parse_real(s: &str) -> Result<f64, Error> {
    s.trim().parse::<f64>().map_err(|_| Error::Parse)
}

/// Parse one count answer (runs or subjects). Signs and fractions are rejected.
pub fn parse_count(s: &str) -> Result<usize, Error> {
    s.trim().parse::<usize>().map_err(|_| Error::Parse)
}

/// Parameters of one ARL study.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArlConfig {
    /// Adequate (acceptable) failure rate, in `(0, 1)`.
    pub p0: f64,
    /// Equivalence zone; the unacceptable rate is `p0 + delta`.
    pub delta: f64,
    /// Decision limit `h`. Any value is accepted.
    pub threshold: f64,
    /// Simulated runs per rate (must be >= 1).
    pub trials: usize,
    /// Subjects per run (must be >= 1).
    pub subjects: usize,
    /// Fixed seed; `None` draws a fresh one per study.
    pub seed: Option<u64>,
    pub scheme: SamplingScheme,
}

impl Default for ArlConfig {
    fn default() -> Self {
        Self {
            p0: 0.1,
            delta: 0.1,
            threshold: 2.0,
            trials: 1000,
            subjects: 100,
            seed: None,
            scheme: SamplingScheme::FixedCount,
        }
    }
}

impl ArlConfig {
    /// Parse the five interactive fields `[p0, δ, h, runs, subjects]`, then
    /// [`validate`](Self::validate).
    ///
    /// Every field is parsed before any range is checked, so a malformed count
    /// is reported as [`Error::Parse`] even when `p0` is also out of range.
    pub fn from_inputs(fields: [&str; 5]) -> Result<Self, Error> {
        let [p0, delta, h, runs, subjects] = fields;
        let cfg = Self {
            p0: parse_real(p0)?,
            delta: parse_real(delta)?,
            threshold: parse_real(h)?,
            trials: parse_count(runs)?,
            subjects: parse_count(subjects)?,
            ..Self::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Range checks, in reporting order: `p0`, `delta`, counts, then `p0 + delta < 1`.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.p0 > 0.0 && self.p0 < 1.0) {
            return Err(Error::P0OutOfRange);
        }
        if !(self.delta > 0.0 && self.delta < 1.0) {
            return Err(Error::DeltaOutOfRange);
        }
        if self.trials == 0 {
            return Err(Error::NoTrials);
        }
        if self.subjects == 0 {
            return Err(Error::NoSubjects);
        }
        if self.p0 + self.delta >= 1.0 {
            return Err(Error::Domain("p0 + δ must be below one"));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rate the chart should signal quickly on.
    pub fn acceptable_rate(&self) -> f64 {
        self.p0
    }

    /// Rate the chart should stay quiet on.
    pub fn unacceptable_rate(&self) -> f64 {
        self.p0 + self.delta
    }

    pub fn weights(&self) -> Result<Weights, Error> {
        Weights::new(self.p0, self.delta)
    }

    /// Generator for this study and the seed it was built from.
    pub fn rng(&self) -> (StdRng, u64) {
        let seed = self.seed.unwrap_or_else(rand::random::<u64>);
        (StdRng::seed_from_u64(seed), seed)
    }
}
