//! Application bootstrap library.
//!
//! Provisions the random startup configuration for a deterministic
//! application and initializes the application with it exactly once. The
//! random source, the application entry point and the mount handle are all
//! passed in explicitly; the bootstrap keeps no state of its own.

use log::debug;

use seedboot_entropy::RandomSource;

pub use seedboot_core::{SeedBundle, SeedProvisioner};
pub use seedboot_entropy::SodiumRandomSource;

pub use self::config::StartupConfig;
pub use self::errors::LaunchError;
pub use self::host::AppEntryPoint;

mod config;
mod errors;
mod host;

/// Boots the application: provisions a fresh seed bundle from `source`,
/// packages it as the startup payload and initializes `entry_point` on the
/// given mount handle.
///
/// Invoked once per application lifecycle. The mount handle is consumed,
/// and the handle to the initialized application is returned to the caller.
pub fn launch<R, E>(source: R, entry_point: &E, mount: E::Mount) -> Result<E::App, LaunchError>
where
    R: RandomSource,
    E: AppEntryPoint,
{
    let bundle = SeedProvisioner::new(source).provision().map_err(|e| LaunchError::Provision(e))?;
    debug!("Provisioned startup bundle with {} auxiliary seeds", bundle.auxiliary_seeds().len());

    Ok(entry_point.initialize(mount, StartupConfig::from(bundle)))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use seedboot_entropy::{EntropyError, Result};

    use super::*;

    /// Source that counts up from zero, one value per draw.
    struct CountingSource(u16);

    impl RandomSource for CountingSource {
        fn next_u16(&mut self) -> Result<u16> {
            let value = self.0;
            self.0 += 1;
            Ok(value)
        }
    }

    struct UnavailableSource;

    impl RandomSource for UnavailableSource {
        fn next_u16(&mut self) -> Result<u16> {
            Err(EntropyError::SourceUnavailable)
        }
    }

    /// Entry point that records how often it was initialized.
    struct RecordingApp {
        init_calls: Cell<usize>,
    }

    impl RecordingApp {
        fn new() -> Self {
            RecordingApp { init_calls: Cell::new(0) }
        }
    }

    impl AppEntryPoint for RecordingApp {
        type Mount = &'static str;
        type App = (String, StartupConfig);

        fn initialize(&self, mount: Self::Mount, config: StartupConfig) -> Self::App {
            self.init_calls.set(self.init_calls.get() + 1);
            (mount.to_string(), config)
        }
    }

    #[test]
    fn test_launch_initializes_exactly_once() {
        let entry_point = RecordingApp::new();
        let (mount, config) = launch(CountingSource(0), &entry_point, "root").expect("launch failed");

        assert_eq!(entry_point.init_calls.get(), 1);
        assert_eq!(mount, "root");
        assert_eq!(config.seed, 0);
        assert_eq!(config.seeds.len(), SeedBundle::AUXILIARY_SEED_COUNT);
        assert_eq!(config.seeds.first(), Some(&1));
    }

    #[test]
    fn test_launch_without_entropy_fails() {
        let entry_point = RecordingApp::new();
        let res = launch(UnavailableSource, &entry_point, "root");

        assert_eq!(res, Err(LaunchError::Provision(EntropyError::SourceUnavailable)));
        assert_eq!(entry_point.init_calls.get(), 0);
    }
}
