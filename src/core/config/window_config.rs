use crate::core::config::errors::ConfigError;
use crate::core::data::client_size::ClientSize;
use crate::core::data::pixel::Pixel;

const DEFAULT_TITLE: &str = "Window";
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_MIN_SIDE: u32 = 200;
const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub fps: u32,
    /// Colour the client area is cleared to before components draw.
    pub clear_colour: Pixel,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_width: DEFAULT_MIN_SIDE,
            min_height: DEFAULT_MIN_SIDE,
            fps: DEFAULT_FPS,
            clear_colour: Pixel::AZURE,
        }
    }
}

impl WindowConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_min_size(mut self, min_width: u32, min_height: u32) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    #[must_use]
    pub fn with_clear_colour(mut self, clear_colour: Pixel) -> Self {
        self.clear_colour = clear_colour;
        self
    }

    #[must_use]
    pub fn size(&self) -> ClientSize {
        ClientSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn min_size(&self) -> ClientSize {
        ClientSize::new(self.min_width, self.min_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.fps > 1000 {
            return Err(ConfigError::FrameRateTooHigh { fps: self.fps });
        }
        if self.size().is_empty() {
            return Err(ConfigError::EmptyWindowSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_width > self.width || self.min_height > self.height {
            return Err(ConfigError::MinimumExceedsSize {
                width: self.width,
                height: self.height,
                min_width: self.min_width,
                min_height: self.min_height,
            });
        }
        Ok(())
    }
}
