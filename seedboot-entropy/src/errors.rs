//! Entropy errors.

use thiserror::Error;

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum EntropyError {
    #[error("Secure random source is unavailable on this host")]
    SourceUnavailable,
}

pub type Result<T> = std::result::Result<T, EntropyError>;
