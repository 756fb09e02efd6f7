pub mod surface;

pub use surface::{SurfaceFactoryPort, SurfacePort};
