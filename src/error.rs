//! Error types shared by the minimization core and its front-ends.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of [`Error`] values.
///
/// Front-ends use it to decide between printing a usage message
/// (invalid input) and aborting with a report (broken invariant).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The caller supplied data that cannot describe a logic function.
    InvalidInput,
    /// An internal invariant of the minimizer did not hold.
    InvariantViolation,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("value {0} is listed both as a minterm and as a don't-care")]
    ConflictingAssignment(u32),

    #[error("value {value} does not fit in {width} input bits")]
    OutOfRange { value: u32, width: u32 },

    #[error("number of inputs must be in 1..={max}, got {width}")]
    InvalidWidth { width: u32, max: u32 },

    #[error("malformed list `{0}`: expected comma-separated numbers enclosed in []")]
    MalformedList(String),

    #[error("`{0}` is not a valid number")]
    NotANumber(String),

    #[error("truth table line {line}: {reason}")]
    TruthTable { line: usize, reason: String },

    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("function `{0}` has no essential implicants")]
    NoEssentialImplicants(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoEssentialImplicants(_) => ErrorKind::InvariantViolation,
            _ => ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Error::ConflictingAssignment(3).kind(), ErrorKind::InvalidInput);
        assert_eq!(Error::MalformedList("1,2".into()).kind(), ErrorKind::InvalidInput);
        assert_eq!(Error::NoEssentialImplicants("Q".into()).kind(), ErrorKind::InvariantViolation);
    }

    #[test]
    fn test_display() {
        let e = Error::OutOfRange { value: 9, width: 3 };
        assert_eq!(e.to_string(), "value 9 does not fit in 3 input bits");
        let e = Error::TruthTable {
            line: 4,
            reason: "missing `|` separator".into(),
        };
        assert_eq!(e.to_string(), "truth table line 4: missing `|` separator");
    }
}
