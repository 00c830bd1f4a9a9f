//! Seed provisioning for deterministic application startup. This includes:
//! * [SeedBundle](struct.SeedBundle.html) - The immutable random startup material for one application lifecycle.
//! * [SeedProvisioner](struct.SeedProvisioner.html) - Draws a fresh bundle from an injected random source.
//!
//! A bundle holds one scalar primary seed plus a fixed pool of
//! [SeedBundle::AUXILIARY_SEED_COUNT](struct.SeedBundle.html#associatedconstant.AUXILIARY_SEED_COUNT)
//! auxiliary seeds, all drawn independently from a cryptographically strong source in a single pass.
//!
//! # Example
//! ```rust
//! use seedboot_core::{SeedBundle, SeedProvisioner};
//! use seedboot_entropy::SodiumRandomSource;
//!
//! let source = SodiumRandomSource::new().expect("no entropy source");
//! let bundle = SeedProvisioner::new(source).provision().expect("provisioning failed");
//! assert_eq!(bundle.auxiliary_seeds().len(), SeedBundle::AUXILIARY_SEED_COUNT);
//! ```

pub use seedboot_entropy::{EntropyError, RandomSource, Result};

pub use self::bundle::SeedBundle;
pub use self::provision::SeedProvisioner;

mod bundle;
mod provision;
