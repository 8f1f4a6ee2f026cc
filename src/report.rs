//! Two-rate ARL study: ARL0 at the unacceptable rate, ARL1 at the acceptable one.

use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use crate::arl::{estimate_arl_detailed, ArlEstimate};
use crate::{ArlConfig, Error, Weights};

/// Output of [`run_report`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArlReport {
    pub config: ArlConfig,
    pub weights: Weights,
    /// Estimate at `p0 + δ` (false-alarm side).
    pub arl0: ArlEstimate,
    /// Estimate at `p0` (detection side).
    pub arl1: ArlEstimate,
}

impl ArlReport {
    pub fn acceptable_rate(&self) -> f64 {
        self.config.acceptable_rate()
    }

    pub fn unacceptable_rate(&self) -> f64 {
        self.config.unacceptable_rate()
    }

    /// The parameter block echoed before the estimates.
    pub fn parameters(&self) -> Parameters<'_> {
        Parameters::new(&self.config, self.weights)
    }
}

/// A stage of [`run_report_with`], delivered as soon as it is available.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Validated parameters and derived weights, before any simulation.
    Parameters(Parameters<'a>),
    /// Estimate at the unacceptable rate, before the acceptable one starts.
    Arl0(&'a ArlEstimate),
    Arl1(&'a ArlEstimate),
}

/// Validate `cfg`, derive the weights, and estimate both run lengths from one
/// generator (unacceptable rate first).
pub fn run_report<R: Rng + ?Sized>(cfg: &ArlConfig, rng: &mut R) -> Result<ArlReport, Error> {
    run_report_with(cfg, rng, |_| Ok(()))
}

/// [`run_report`], calling `on_progress` after each stage. An error from the
/// callback aborts the study.
pub fn run_report_with<R, F>(
    cfg: &ArlConfig,
    rng: &mut R,
    mut on_progress: F,
) -> Result<ArlReport, Error>
where
    R: Rng + ?Sized,
    F: FnMut(Progress<'_>) -> Result<(), Error>,
{
    cfg.validate()?;
    let weights = cfg.weights()?;
    debug!(wt0 = weights.wt0, wt1 = weights.wt1, "derived weights");
    on_progress(Progress::Parameters(Parameters::new(cfg, weights)))?;

    let arl0 = estimate_arl_detailed(
        rng,
        cfg.threshold,
        weights,
        cfg.unacceptable_rate(),
        cfg.trials,
        cfg.subjects,
        cfg.scheme,
    )?;
    on_progress(Progress::Arl0(&arl0))?;

    let arl1 = estimate_arl_detailed(
        rng,
        cfg.threshold,
        weights,
        cfg.acceptable_rate(),
        cfg.trials,
        cfg.subjects,
        cfg.scheme,
    )?;
    on_progress(Progress::Arl1(&arl1))?;
    info!(arl0 = arl0.mean, arl1 = arl1.mean, "arl study complete");

    Ok(ArlReport {
        config: cfg.clone(),
        weights,
        arl0,
        arl1,
    })
}

/// Display adapter for the parameter echo. Reals print in round-trip form
/// (`2.0`, not `2`).
#[derive(Debug, Clone, Copy)]
pub struct Parameters<'a> {
    config: &'a ArlConfig,
    weights: Weights,
}

impl<'a> Parameters<'a> {
    pub fn new(config: &'a ArlConfig, weights: Weights) -> Self {
        Self { config, weights }
    }
}

impl fmt::Display for Parameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;
        writeln!(f, "Calculating ARL with parameters:")?;
        writeln!(f, "p0                          : {:?}", c.p0)?;
        writeln!(f, "δ                           : {:?}", c.delta)?;
        writeln!(f, "h                           : {:?}", c.threshold)?;
        writeln!(f, "number of runs              : {}", c.trials)?;
        writeln!(f, "number of subjects in a run : {}", c.subjects)?;
        writeln!(f, "wt0                         : {:?}", self.weights.wt0)?;
        writeln!(f, "wt1                         : {:?}", self.weights.wt1)?;
        writeln!(f, "acceptable failure rate     : {:?}", c.acceptable_rate())?;
        write!(f, "unacceptable failure rate   : {:?}", c.unacceptable_rate())
    }
}

impl fmt::Display for ArlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.parameters())?;
        writeln!(f, "ARL0 : {}", self.arl0.mean)?;
        write!(f, "ARL1 : {}", self.arl1.mean)
    }
}
