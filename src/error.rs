use thiserror::Error;

/// Errors returned by the FNV hashing functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested digest length is outside `[16, 1024]` bits.
    #[error("unsupported FNV hash length {0} bits: must be between 16 and 1024 inclusive")]
    UnsupportedLength(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
