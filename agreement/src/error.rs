//! Error types.

use core::fmt::{self, Display};

/// Key agreement errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// An argument failed validation.
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,

        /// What is wrong with it.
        reason: &'static str,
    },

    /// No agreement strategy exists for this key family.
    UnsupportedKeyType {
        /// Name of the offending argument.
        argument: &'static str,

        /// Name of the key type.
        type_name: &'static str,
    },

    /// Key is of the wrong family or visibility for this operation.
    KeyMismatch,

    /// Private and public key use different domain parameters.
    DomainMismatch,

    /// Peer public key is degenerate.
    InvalidPublicKey,

    /// Agreement produced the point at infinity.
    PointAtInfinity,

    /// Agreement calculated before the strategy was initialized.
    NotInitialized,

    /// Point is not on the curve, or its encoding is malformed.
    InvalidPoint,

    /// Field arithmetic failed.
    Field(ecfield::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { argument, reason } => {
                write!(f, "'{}' {}", argument, reason)
            }
            Error::UnsupportedKeyType {
                argument,
                type_name,
            } => write!(f, "'{}' type not supported: {}", argument, type_name),
            Error::KeyMismatch => f.write_str("key is of the wrong type for this agreement"),
            Error::DomainMismatch => f.write_str("public key has wrong domain parameters"),
            Error::InvalidPublicKey => f.write_str("invalid public key"),
            Error::PointAtInfinity => f.write_str("agreement produced the point at infinity"),
            Error::NotInitialized => f.write_str("agreement not initialized"),
            Error::InvalidPoint => f.write_str("invalid elliptic curve point"),
            Error::Field(err) => write!(f, "field arithmetic error: {}", err),
        }
    }
}

impl From<ecfield::Error> for Error {
    fn from(err: ecfield::Error) -> Error {
        Error::Field(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
