//! Startup configuration payload.

use serde::{Deserialize, Serialize};

use seedboot_core::SeedBundle;

/// Startup payload handed to the application entry point.
///
/// The bootstrap treats the payload as opaque once built; how the
/// application uses the seeds is its own business. Serializes to the
/// `{ "seed": …, "seeds": […] }` object the application reads as flags.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Scalar seed for the application's own generator.
    pub seed: u16,

    /// Auxiliary seed pool, order preserved from provisioning.
    pub seeds: Vec<u16>,
}

impl From<SeedBundle> for StartupConfig {
    fn from(bundle: SeedBundle) -> Self {
        let (seed, seeds) = bundle.into_parts();
        StartupConfig { seed, seeds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_json_shape() {
        let config = StartupConfig {
            seed: 7,
            seeds: vec![1, 2, 3],
        };
        let json = serde_json::to_string(&config).expect("serialization failed");
        assert_eq!(json, r#"{"seed":7,"seeds":[1,2,3]}"#);
    }

    #[test]
    fn test_payload_roundtrip() {
        let config = StartupConfig {
            seed: 65535,
            seeds: vec![0, 65535, 42],
        };
        let json = serde_json::to_string(&config).expect("serialization failed");
        let parsed: StartupConfig = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(parsed, config);
    }
}
