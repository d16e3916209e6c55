//! Error types.

use core::fmt::{self, Display};

/// Field arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Attempted to invert (or divide by) the zero element.
    ZeroInversion,

    /// The element is a quadratic non-residue.
    NoSquareRoot,

    /// The quadratic equation `z^2 + z = a` has no solution in the field.
    NoSolution,

    /// Operands are not elements of the same field.
    FieldMismatch,

    /// Field parameters are malformed.
    InvalidParameters(&'static str),

    /// Value is not the canonical (reduced) representative of a field element.
    NonCanonical,

    /// Encoded input has the wrong length.
    InvalidLength,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroInversion => f.write_str("zero element has no inverse"),
            Error::NoSquareRoot => f.write_str("element has no square root"),
            Error::NoSolution => f.write_str("quadratic equation has no solution"),
            Error::FieldMismatch => {
                f.write_str("field elements are not elements of the same field")
            }
            Error::InvalidParameters(reason) => write!(f, "invalid field parameters: {}", reason),
            Error::NonCanonical => f.write_str("value is not a canonical field element"),
            Error::InvalidLength => f.write_str("invalid encoded length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
