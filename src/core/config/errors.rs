use thiserror::Error;

/// A rejected configuration value. Values are never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("frame rate cannot be zero")]
    ZeroFrameRate,

    #[error("frame rate {fps} is above 1000 and would give a zero frame interval")]
    FrameRateTooHigh { fps: u32 },

    #[error("time between frames cannot be zero")]
    ZeroFrameInterval,

    #[error("window size {width}x{height} has a zero side")]
    EmptyWindowSize { width: u32, height: u32 },

    #[error("minimum size {min_width}x{min_height} exceeds window size {width}x{height}")]
    MinimumExceedsSize {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}
