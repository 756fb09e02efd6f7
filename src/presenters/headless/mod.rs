pub mod surface;

pub use surface::{HeadlessDevice, HeadlessSurface, HeadlessSurfaceFactory, SharedDevice};
