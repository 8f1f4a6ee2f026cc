//! `lccusum`: average run length (ARL) estimation for likelihood-ratio CUSUM
//! charts on binary outcomes.
//!
//! The chart monitors a success/failure indicator against an adequate failure
//! rate `p0` and an unacceptable rate `p0 + δ` (`δ` is the equivalence zone).
//! Each observation adds a log-likelihood-ratio weight to a running score that
//! is held at or above zero; the chart signals once the score exceeds a
//! decision limit `h`.
//!
//! The crate estimates, by Monte Carlo simulation, how many observations the
//! chart needs on average before it signals:
//!
//! - **ARL0**: at the unacceptable rate `p0 + δ` (the false-alarm side).
//! - **ARL1**: at the acceptable rate `p0` (the detection side).
//!
//! **Pipeline:**
//! - [`Weights`] / [`calculate_weight`]: `(p0, δ)` → `(wt0, wt1)`.
//! - [`generate_outcomes`]: fixed-composition random 0/1 sequence at a rate.
//! - [`cumulative_path`] / [`CusumWalk`]: the lower-bounded walk.
//! - [`estimate_arl`] / [`estimate_arl_detailed`]: mean first-passage index
//!   over independent trials.
//! - [`run_report`]: both estimates for an [`ArlConfig`].
//!
//! **Convention.** In a generated sequence, `1` marks a failure drawn at the
//! requested rate. The walk scores a `1` with `wt1 = ln(p0 / (p0 + δ)) < 0` and
//! a `0` with `wt0 = ln((1 - p0) / (1 - p0 - δ)) > 0`. The score therefore
//! drifts upward at the acceptable rate (by `KL(p0 ‖ p0+δ)` per step) and
//! downward at the unacceptable rate, so ARL1 < ARL0: the chart signals that
//! performance has become adequate.
//!
//! **Randomness** is always an explicit `&mut impl Rng`; seed a
//! `rand::rngs::StdRng` for reproducible studies.
//!
//! ```rust
//! use lccusum::{estimate_arl, Weights};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let w = Weights::new(0.3, 0.1).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let arl = estimate_arl(&mut rng, 1.0, w, 0.3, 100, 200).unwrap();
//! assert!((1.0..=200.0).contains(&arl));
//! ```

#![forbid(unsafe_code)]

mod error;
pub use error::Error;

mod weight;
pub use weight::*;

pub mod outcome;
pub use outcome::{generate_outcomes, SamplingScheme};

pub mod path;
pub use path::{cumulative_path, run_length, CusumWalk};

mod stats;
pub use stats::wilson_interval;

pub mod arl;
pub use arl::{estimate_arl, estimate_arl_detailed, simulate_run_lengths, ArlEstimate};

mod config;
pub use config::{parse_count, parse_real, ArlConfig};

mod report;
pub use report::{run_report, run_report_with, ArlReport, Parameters, Progress};
