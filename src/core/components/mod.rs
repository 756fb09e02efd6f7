//! Visual components and the z-ordered registry that owns them.

pub mod animated_image;
pub mod component;
pub mod context;
pub mod errors;
pub mod image;
pub mod registry;

pub use animated_image::AnimatedImage;
pub use component::{Component, ComponentId, Drawable};
pub use context::WindowContext;
pub use errors::ImageError;
pub use image::Image;
pub use registry::ComponentRegistry;
