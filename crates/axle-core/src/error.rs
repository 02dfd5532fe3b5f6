//! Error types for axle-core operations.
//!
//! The toolkit's fallible surface is deliberately small: most operations
//! either cannot fail or signal a rejected precondition with a boolean.
//! [`Error`] covers what remains - acquiring OS entropy for a
//! [`Random`](crate::random::Random) generator, and a catch-all for embedding
//! applications that want to reuse the alias.
//!
//! # Usage
//!
//! ```rust
//! use axle_core::{Error, Result};
//!
//! fn parse_level(input: &str) -> Result<u8> {
//!     input
//!         .parse()
//!         .map_err(|_| Error::other(format!("bad level: {input}")))
//! }
//!
//! assert!(parse_level("3").is_ok());
//! assert!(parse_level("high").is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in axle-core operations.
///
/// Uses [`thiserror`] for the [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system's entropy source could not be read.
    ///
    /// Returned when seeding a [`Random`](crate::random::Random) generator
    /// from OS entropy fails. Callers that only need reproducibility can
    /// fall back to [`Random::from_seed`](crate::random::Random::from_seed),
    /// which cannot fail.
    #[error("failed to acquire OS entropy: {0}")]
    Entropy(#[from] rand::Error),

    /// Generic error with custom message.
    ///
    /// Catch-all for errors that don't fit other categories.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is an entropy acquisition error.
    #[inline]
    pub fn is_entropy_error(&self) -> bool {
        matches!(self, Self::Entropy(_))
    }
}
