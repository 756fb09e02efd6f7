//! Windowed host: winit supplies the window and its events, pixels the
//! surface the canvas is presented to.

pub mod host;

pub use host::WinitHost;
