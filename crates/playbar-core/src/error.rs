//! Error types for player construction and reconfiguration.

use thiserror::Error;

use crate::binding::BindingError;
use crate::platform::PlatformError;

/// Errors returned by [`Player`](crate::Player) construction and `set_config`.
///
/// Everything else a player does recovers locally and never fails.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum PlayerError {
    /// The container is not a usable element handle.
    #[error("container is not a valid element")]
    InvalidElement,

    /// The configuration could not be read at all.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A listener key was bound twice.
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// The host failed to build the surface or attach a listener.
    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),
}
