use thiserror::Error;

use crate::core::config::errors::ConfigError;

/// Failure reported by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("failed to create window: {0}")]
    WindowCreation(String),

    #[error("failed to create surface factory: {0}")]
    SurfaceFactory(String),

    #[error("host event loop failed: {0}")]
    EventLoop(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("invalid window configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("window controller is already initialized")]
    AlreadyInitialized,

    #[error("window controller must be initialized before it can run")]
    NotInitialized,

    #[error("window controller has stopped and cannot be started again")]
    Stopped,
}
