//! Bootstrap errors.

use thiserror::Error;

use seedboot_entropy::EntropyError;

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum LaunchError {
    /// Startup seeds could not be drawn. Fatal: the application is never
    /// initialized with a partial or low-quality seed set.
    #[error("Failed to provision startup seeds")]
    Provision(#[source] EntropyError),
}
