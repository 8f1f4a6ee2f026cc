//! Likelihood-ratio weights for the two outcome categories.
//!
//! For a single Bernoulli observation `x`, the weight is the log-likelihood ratio
//! between the adequate rate `p0` and the shifted rate `p0 + δ`:
//!
//! \(w(x) = \ln\frac{p_0^x (1-p_0)^{1-x}}{(p_0+\delta)^x (1-p_0-\delta)^{1-x}}\)
//!
//! With `0 < p0 < p0 + δ < 1`, `w(0) > 0` and `w(1) < 0`.

use crate::Error;

/// Numerical tolerance handed to `logp` simplex validation.
const SIMPLEX_TOL: f64 = 1e-9;

/// Log-likelihood-ratio weight for one observation with value `outcome`.
///
/// No validation: outside `0 < p0 < 1`, `0 < p0 + delta < 1` the result is
/// non-finite (NaN or infinite). Use [`Weights::new`] for a checked pair.
pub fn calculate_weight(p0: f64, delta: f64, outcome: u8) -> f64 {
    let x = i32::from(outcome);
    let p1 = p0 + delta;
    let num = p0.powi(x) * (1.0 - p0).powi(1 - x);
    let den = p1.powi(x) * (1.0 - p1).powi(1 - x);
    (num / den).ln()
}

/// Weight pair `(wt0, wt1)` added to the score for an outcome of 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    pub wt0: f64,
    pub wt1: f64,
}

impl Weights {
    /// Checked weights for an adequate rate `p0` and equivalence zone `delta`.
    pub fn new(p0: f64, delta: f64) -> Result<Self, Error> {
        if !(p0 > 0.0 && p0 < 1.0) {
            return Err(Error::P0OutOfRange);
        }
        if !(delta > 0.0 && delta < 1.0) {
            return Err(Error::DeltaOutOfRange);
        }
        if p0 + delta >= 1.0 {
            return Err(Error::Domain("p0 + δ must be below one"));
        }
        let w = Self::from_params_unchecked(p0, delta);
        if !(w.wt0.is_finite() && w.wt1.is_finite()) {
            return Err(Error::Domain("weights are not finite"));
        }
        Ok(w)
    }

    /// Weights straight from [`calculate_weight`], without range checks.
    pub fn from_params_unchecked(p0: f64, delta: f64) -> Self {
        Self {
            wt0: calculate_weight(p0, delta, 0),
            wt1: calculate_weight(p0, delta, 1),
        }
    }

    /// Weight for a single outcome, `None` for anything other than 0/1.
    pub fn get(&self, outcome: u8) -> Option<f64> {
        match outcome {
            0 => Some(self.wt0),
            1 => Some(self.wt1),
            _ => None,
        }
    }

    /// Expected per-step increment when a fraction `rate` of the outcomes are 1:
    /// `rate * wt1 + (1 - rate) * wt0`.
    ///
    /// Ignores the lower bound at zero, so it describes the walk away from the
    /// barrier.
    pub fn drift(&self, rate: f64) -> f64 {
        rate * self.wt1 + (1.0 - rate) * self.wt0
    }
}

/// `KL(Bern(a) || Bern(b))` in nats.
///
/// With weights from `(p0, δ)`, `drift(p0) == bernoulli_kl(p0, p0 + δ)` and
/// `drift(p0 + δ) == -bernoulli_kl(p0 + δ, p0)`.
pub fn bernoulli_kl(a: f64, b: f64) -> Result<f64, Error> {
    if !(0.0..=1.0).contains(&a) || !(0.0..=1.0).contains(&b) {
        return Err(Error::Domain("bernoulli_kl: rates must lie in [0, 1]"));
    }
    let p = [a, 1.0 - a];
    let q = [b, 1.0 - b];
    Ok(logp::kl_divergence(&p, &q, SIMPLEX_TOL)?)
}

/// Wald-style approximation of the first-passage time: `max(h, 0) / drift`.
///
/// Returns `None` when the drift is not positive (the walk is not expected to
/// cross, and the run is then bounded by the number of subjects instead).
/// Overshoot and the reflecting barrier are ignored.
pub fn approx_run_length(h: f64, drift: f64) -> Option<f64> {
    if !(drift.is_finite() && drift > 0.0) || h.is_nan() {
        return None;
    }
    Some(h.max(0.0) / drift)
}
