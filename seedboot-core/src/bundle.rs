//! Seed bundle for one application startup.

/// Immutable random startup material: one primary seed plus a fixed pool of
/// auxiliary seeds, in draw order.
///
/// A bundle has no identity beyond its values. It is created fresh per
/// startup by [`SeedProvisioner`](crate::SeedProvisioner) and consumed by
/// value by the initialization call; it is never stored or mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedBundle {
    primary_seed: u16,
    auxiliary_seeds: Vec<u16>,
}

impl SeedBundle {
    /// Number of auxiliary seeds drawn per startup.
    pub const AUXILIARY_SEED_COUNT: usize = 1000;

    pub(crate) fn new(primary_seed: u16, auxiliary_seeds: Vec<u16>) -> Self {
        debug_assert_eq!(auxiliary_seeds.len(), Self::AUXILIARY_SEED_COUNT);
        SeedBundle { primary_seed, auxiliary_seeds }
    }

    /// The single scalar seed.
    pub fn primary_seed(&self) -> u16 {
        self.primary_seed
    }

    /// The auxiliary seeds, in the order they were drawn.
    pub fn auxiliary_seeds(&self) -> &[u16] {
        &self.auxiliary_seeds
    }

    /// Consumes the bundle, yielding its parts.
    pub fn into_parts(self) -> (u16, Vec<u16>) {
        (self.primary_seed, self.auxiliary_seeds)
    }
}
