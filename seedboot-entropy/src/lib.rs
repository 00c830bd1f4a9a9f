//! Secure random source capability.
//!
//! Entropy access goes through the [`RandomSource`] trait so that callers
//! receive the capability by injection instead of reaching for a global
//! facility. The production implementation is [`SodiumRandomSource`];
//! deterministic substitutes can be written against the trait for testing.

pub use self::errors::{EntropyError, Result};
pub use self::source::{RandomSource, SodiumRandomSource};

mod errors;
mod source;
