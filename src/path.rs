//! Lower-bounded cumulative score walk.
//!
//! \(S_t = \max(0, S_{t-1} + w(X_t))\), \(S_0 = 0\), with `w(0) = wt0` and
//! `w(1) = wt1`.

use crate::{Error, Weights};

/// Running state of the lower-bounded walk.
#[derive(Debug, Clone, Copy)]
pub struct CusumWalk {
    weights: Weights,
    s: f64,
    n: usize,
}

impl CusumWalk {
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            s: 0.0,
            n: 0,
        }
    }

    pub fn reset(&mut self) {
        self.s = 0.0;
        self.n = 0;
    }

    pub fn score(&self) -> f64 {
        self.s
    }

    /// Observations consumed since the last reset.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Add the weight for `outcome` and clamp at zero; returns the new score.
    ///
    /// On an outcome other than 0/1 the state is left unchanged.
    pub fn step(&mut self, outcome: u8) -> Result<f64, Error> {
        let w = self.weights.get(outcome).ok_or(Error::InvalidCategory {
            value: outcome,
            index: self.n,
        })?;
        self.s += w;
        if self.s < 0.0 {
            self.s = 0.0;
        }
        self.n += 1;
        Ok(self.s)
    }
}

/// Score after every element of `sequence`; same length as the input.
pub fn cumulative_path(sequence: &[u8], wt0: f64, wt1: f64) -> Result<Vec<f64>, Error> {
    let mut walk = CusumWalk::new(Weights { wt0, wt1 });
    sequence.iter().map(|&x| walk.step(x)).collect()
}

/// 1-based index of the first score strictly above `h`, or `path.len()` when
/// none is.
pub fn run_length(path: &[f64], h: f64) -> usize {
    path.iter()
        .position(|&s| s > h)
        .map_or(path.len(), |i| i + 1)
}

/// 1-based index of the first score strictly above `h`, `None` if the walk
/// never crosses. Stops at the crossing.
///
/// Elements after the crossing are not inspected, so an invalid category past
/// that point goes unreported.
pub fn first_crossing(sequence: &[u8], weights: Weights, h: f64) -> Result<Option<usize>, Error> {
    let mut walk = CusumWalk::new(weights);
    for &x in sequence {
        if walk.step(x)? > h {
            return Ok(Some(walk.n()));
        }
    }
    Ok(None)
}

/// [`run_length`] of the path `sequence` would produce, without materializing it.
pub fn first_passage(sequence: &[u8], weights: Weights, h: f64) -> Result<usize, Error> {
    Ok(first_crossing(sequence, weights, h)?.unwrap_or(sequence.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_zero() {
        let p = cumulative_path(&[0, 0, 1, 0], 0.5, -2.0).unwrap();
        assert_eq!(p, vec![0.5, 1.0, 0.0, 0.5]);
    }

    #[test]
    fn empty_sequence_gives_empty_path() {
        assert!(cumulative_path(&[], 1.0, -1.0).unwrap().is_empty());
        assert_eq!(run_length(&[], 0.0), 0);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = cumulative_path(&[0, 1, 2, 0], 0.5, -0.5).unwrap_err();
        match err {
            Error::InvalidCategory { value, index } => {
                assert_eq!(value, 2);
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn walk_state_survives_rejected_step() {
        let mut w = CusumWalk::new(Weights { wt0: 1.0, wt1: -1.0 });
        w.step(0).unwrap();
        assert!(w.step(5).is_err());
        assert_eq!(w.n(), 1);
        assert_eq!(w.score(), 1.0);
        w.reset();
        assert_eq!(w.score(), 0.0);
        assert_eq!(w.n(), 0);
    }

    #[test]
    fn run_length_first_strict_crossing() {
        let p = [0.5, 1.0, 1.0, 2.0];
        assert_eq!(run_length(&p, 1.0), 4);
        assert_eq!(run_length(&p, 0.4), 1);
        assert_eq!(run_length(&p, 5.0), 4);
    }

    #[test]
    fn zero_threshold_leading_zero_outcome_signals_immediately() {
        let w = Weights { wt0: 0.2, wt1: -3.0 };
        let seq = [0, 1, 1, 1, 1, 1];
        assert_eq!(first_passage(&seq, w, 0.0).unwrap(), 1);
        let p = cumulative_path(&seq, w.wt0, w.wt1).unwrap();
        assert_eq!(run_length(&p, 0.0), 1);
    }

    #[test]
    fn first_passage_agrees_with_full_path() {
        let w = Weights { wt0: 0.3, wt1: -0.7 };
        let seq = [0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0];
        let p = cumulative_path(&seq, w.wt0, w.wt1).unwrap();
        for h in [0.0, 0.5, 0.9, 1.2, 10.0] {
            assert_eq!(first_passage(&seq, w, h).unwrap(), run_length(&p, h), "h={h}");
        }
        assert_eq!(first_crossing(&seq, w, 10.0).unwrap(), None);
    }
}
