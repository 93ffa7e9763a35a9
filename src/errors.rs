/// The [`cubehash`](crate) package has a single error type, [`CubeHashError`].
///
/// Two kinds of errors can happen:
///
/// - Invalid parameters ([`CubeHashError::InvalidParameter`]):
///   only reported by the strict constructor [`crate::Params::try_new`].
///   The lenient [`crate::Params::configure`] silently substitutes defaults instead.
///
/// - Use after finalization ([`CubeHashError::UseAfterFinalize`]):
///   a [`crate::CubeHash`] serves exactly one message.
///   Once finalized, further updates or finalizations are rejected and the hasher stays inert.
///
/// A [`core::result::Result`] wrapper called [`CubeHashResult`] (having error fixed to [`CubeHashError`]) is also provided.
use std::{error::Error, fmt::Display};

/// An error happened while configuring or driving a CubeHash computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeHashError {
    /// A parameter lies outside of its valid range.
    InvalidParameter {
        /// The short name of the parameter (`i`, `r`, `b`, `f`, or `h`).
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// The hasher was already finalized.
    UseAfterFinalize,
}

/// The result type of fallible CubeHash operations.
pub type CubeHashResult<T> = Result<T, CubeHashError>;

impl Display for CubeHashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid value {} for parameter {}", value, name)
            }
            Self::UseAfterFinalize => write!(f, "Hasher already finalized"),
        }
    }
}

impl Error for CubeHashError {}

impl From<CubeHashError> for std::io::Error {
    fn from(value: CubeHashError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, value)
    }
}
