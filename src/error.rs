//! Crate error type.

use thiserror::Error;

/// Errors returned by weight derivation, path generation and estimation.
///
/// The `Display` strings of the parse and range variants are the exact messages
/// the `calculate_arl` binary reports to the user.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric field could not be parsed.
    #[error("all the values must be numbers")]
    Parse,
    /// `p0` outside the open interval `(0, 1)`.
    #[error("p0 must be a real number between zero and one.")]
    P0OutOfRange,
    /// The equivalence zone outside the open interval `(0, 1)`.
    #[error("δ must be a real number between zero and one.")]
    DeltaOutOfRange,
    /// Parameters are individually in range but the derived quantity is not.
    #[error("domain error: {0}")]
    Domain(&'static str),
    /// The mean over zero trials is undefined.
    #[error("the number of runs must be a positive integer")]
    NoTrials,
    /// A run over zero subjects has no first-passage index.
    #[error("the number of subjects per run must be a positive integer")]
    NoSubjects,
    /// An outcome other than 0/1 reached the cumulative walk.
    #[error("unexpected outcome value {value} at index {index}")]
    InvalidCategory { value: u8, index: usize },
    /// Failure inside a divergence computation.
    #[error("divergence computation failed: {0}")]
    Divergence(#[from] logp::Error),
    /// Reading answers or writing the report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error comes from user-supplied parameters (as opposed to a
    /// defect inside the simulation).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Parse
                | Error::P0OutOfRange
                | Error::DeltaOutOfRange
                | Error::Domain(_)
                | Error::NoTrials
                | Error::NoSubjects
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_messages_are_stable() {
        assert_eq!(Error::Parse.to_string(), "all the values must be numbers");
        assert_eq!(
            Error::P0OutOfRange.to_string(),
            "p0 must be a real number between zero and one."
        );
        assert_eq!(
            Error::DeltaOutOfRange.to_string(),
            "δ must be a real number between zero and one."
        );
    }

    #[test]
    fn invalid_category_is_not_a_user_error() {
        let e = Error::InvalidCategory { value: 2, index: 3 };
        assert!(!e.is_user_error());
        assert!(Error::NoTrials.is_user_error());
        assert_eq!(e.to_string(), "unexpected outcome value 2 at index 3");
    }

    #[test]
    fn io_and_divergence_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(!e.is_user_error());

        let e: Error = logp::Error::Empty.into();
        assert!(matches!(e, Error::Divergence(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
