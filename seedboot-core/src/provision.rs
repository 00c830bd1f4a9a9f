//! Seed provisioning.

use seedboot_entropy::{RandomSource, Result};

use crate::bundle::SeedBundle;

/// Draws a fresh [`SeedBundle`] from an injected random source.
pub struct SeedProvisioner<R> {
    source: R,
}

impl<R: RandomSource> SeedProvisioner<R> {
    pub fn new(source: R) -> Self {
        SeedProvisioner { source }
    }

    /// Draws the primary seed followed by the auxiliary seeds, preserving
    /// draw order. Fails on the first unavailable draw, so no partial
    /// bundle is ever produced.
    pub fn provision(&mut self) -> Result<SeedBundle> {
        let primary_seed = self.source.next_u16()?;

        let mut auxiliary_seeds = Vec::with_capacity(SeedBundle::AUXILIARY_SEED_COUNT);
        for _ in 0..SeedBundle::AUXILIARY_SEED_COUNT {
            auxiliary_seeds.push(self.source.next_u16()?);
        }

        Ok(SeedBundle::new(primary_seed, auxiliary_seeds))
    }
}
