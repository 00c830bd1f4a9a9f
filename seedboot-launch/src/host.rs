//! Host application interface.

use crate::config::StartupConfig;

/// One-time initialization entry point of the externally built application.
///
/// The bootstrap never inspects the mount handle; it is threaded through to
/// the application untouched. Preparing the mount (and tearing down any
/// loading placeholder) is the host environment's job, done before launch.
pub trait AppEntryPoint {
    /// Opaque handle to the place the application attaches to.
    type Mount;

    /// Handle to the initialized application, returned to the host.
    type App;

    fn initialize(&self, mount: Self::Mount, config: StartupConfig) -> Self::App;
}
