//! Error types for the group algebra.

/// Errors raised by field, curve and group operations.
///
/// Every variant signals bad input detected at the call that received it;
/// none of them is transient and no operation retries internally.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input: a negative exponent, a buffer that is too short, an
    /// invalid generator, or elements taken from different groups.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A numeric argument outside its documented interval, such as a negative
    /// scalar or a scalar wider than the declared bit length.
    #[error("argument out of range: {0}")]
    OutOfRange(&'static str),

    /// The operation does not apply to this element representation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
