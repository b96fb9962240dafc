use thiserror::Error;

use crate::app::ConfigError;
use crate::ports::SurfaceError;

#[derive(Debug, Error)]
pub enum ReliveError {
    #[error("dependency '{name}' unavailable: {reason}")]
    DependencyUnavailable { name: String, reason: String },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("runtime is not running")]
    RuntimeStopped,
}
