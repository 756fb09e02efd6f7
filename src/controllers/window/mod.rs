//! The window controller: message loop, built-in handlers and frame pacing.
//!
//! The controller talks to the platform only through `HostPort`, so the
//! same loop runs against the winit host and the headless one.

mod controller;
pub mod errors;
pub mod ports;
pub mod stats;

pub use controller::{ControllerState, WindowController};
pub use errors::{HostError, WindowError};
pub use ports::HostPort;
pub use stats::FrameStats;
