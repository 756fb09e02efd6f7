//! A small single-window toolkit: a host message loop feeds a
//! priority-ordered event bus, which drives z-ordered components drawn onto
//! a render target that can be lost and rebuilt.

mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::window::{ControllerState, FrameStats, HostError, HostPort, WindowController, WindowError};
pub use crate::core::components::{AnimatedImage, Component, ComponentId, ComponentRegistry, Drawable, Image, ImageError, WindowContext};
pub use crate::core::config::{ConfigError, WindowConfig};
pub use crate::core::data::{client_size::ClientSize, pixel::Pixel, position::Position};
pub use crate::core::events::{
    DispatchTarget, Event, EventId, EventRegistry, Handler, Message, MessageArgs, MessageId, MouseButton, Outcome, Priority,
    dispatch, ids,
};
pub use crate::core::render::{
    BitmapHandle, Canvas, LifecycleEvent, LossReason, RenderError, RenderResource, RenderTarget, ResourceState,
    SurfaceError, SurfaceFactoryPort, SurfacePort,
};
pub use crate::core::timing::FrameClock;
pub use input::headless::HeadlessHost;
pub use presenters::headless::{HeadlessDevice, HeadlessSurface, HeadlessSurfaceFactory, SharedDevice};

#[cfg(feature = "gui")]
pub use input::gui::WinitHost;
#[cfg(feature = "gui")]
pub use presenters::pixels::{PixelsSurface, PixelsSurfaceFactory};

/// Installs `env_logger`, honouring `RUST_LOG` and defaulting to `info`.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
}
