use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::core::data::client_size::ClientSize;
use crate::core::data::pixel::Pixel;
use crate::core::render::canvas::Canvas;
use crate::core::render::errors::{RenderError, SurfaceError};
use crate::core::render::ports::surface::{SurfaceFactoryPort, SurfacePort};

/// State shared by every surface of one headless window.
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    pub surfaces_created: u32,
    pub frames_presented: u64,
    pub last_frame: Option<Vec<Pixel>>,
    /// The next present fails with `SurfaceError::DeviceLost`.
    pub lose_next_present: bool,
    /// The next surface creation fails.
    pub fail_next_creation: bool,
}

pub type SharedDevice = Rc<RefCell<HeadlessDevice>>;

/// Keeps presented frames in memory instead of showing them.
pub struct HeadlessSurface {
    size: ClientSize,
    device: SharedDevice,
}

impl SurfacePort for HeadlessSurface {
    fn size(&self) -> ClientSize {
        self.size
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), SurfaceError> {
        let mut device = self.device.borrow_mut();

        if device.lose_next_present {
            device.lose_next_present = false;
            return Err(SurfaceError::DeviceLost);
        }

        device.frames_presented += 1;
        device.last_frame = Some(canvas.pixels().to_vec());
        Ok(())
    }
}

pub struct HeadlessSurfaceFactory {
    device: SharedDevice,
}

impl HeadlessSurfaceFactory {
    #[must_use]
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }
}

impl SurfaceFactoryPort for HeadlessSurfaceFactory {
    fn create_surface(&mut self, size: ClientSize) -> Result<Box<dyn SurfacePort>, RenderError> {
        {
            let mut device = self.device.borrow_mut();
            if device.fail_next_creation {
                device.fail_next_creation = false;
                return Err(RenderError::SurfaceCreation("headless device refused".to_string()));
            }
            device.surfaces_created += 1;
        }

        debug!("headless surface created at {}x{}", size.width, size.height);

        Ok(Box::new(HeadlessSurface {
            size,
            device: Rc::clone(&self.device),
        }))
    }
}
