pub mod errors;
pub mod window_config;

pub use errors::ConfigError;
pub use window_config::WindowConfig;
