use thiserror::Error;

/// Core error type shared across HomeFax crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A state code outside the reference tables.
    #[error("unknown state code: {0}")]
    UnknownState(String),
    /// A generated record violates a policy invariant.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by HomeFax crates.
pub type Result<T> = std::result::Result<T, Error>;
