//! Software render target and its lost/recreated lifecycle.

pub mod canvas;
pub mod errors;
pub mod lifecycle;
pub mod ports;
pub mod resource;
pub mod target;

pub use canvas::Canvas;
pub use errors::{RenderError, SurfaceError};
pub use lifecycle::{LifecycleEvent, LossReason};
pub use ports::{SurfaceFactoryPort, SurfacePort};
pub use resource::{RenderResource, ResourceState};
pub use target::{BitmapHandle, RenderTarget};
