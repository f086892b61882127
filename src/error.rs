use thiserror::Error;

/// Errors raised when no verdict can be computed.
///
/// A signature that simply does not match is never an error; verification
/// returns `Ok(false)` for that case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Malformed key: {0}")]
    MalformedKey(String),

    #[error("Key too small: need {required} bytes of modulus, have {actual}")]
    KeyTooSmall { required: usize, actual: usize },

    #[error("Decryption error: encoded block does not reduce modulo the key modulus")]
    DecryptionError,

    #[error("No curve selected")]
    NoCurveSelected,

    #[error("Unknown curve: {0}")]
    UnknownCurve(String),

    #[error("Invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },

    #[error("Hash of {actual} bytes is too short for {curve}: need at least {minimum}")]
    PrehashTooShort {
        curve: String,
        minimum: usize,
        actual: usize,
    },

    #[error("Curve error: {0}")]
    Curve(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<p256::ecdsa::Error> for Error {
    fn from(err: p256::ecdsa::Error) -> Self {
        // signature::Error carries no key material in its message
        Error::Curve(err.to_string())
    }
}
