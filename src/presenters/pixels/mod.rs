pub mod factory;
pub mod surface;

pub use factory::PixelsSurfaceFactory;
pub use surface::PixelsSurface;
