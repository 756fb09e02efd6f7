use std::time::Duration;

use crate::controllers::window::errors::HostError;
use crate::core::components::context::WindowContext;
use crate::core::config::window_config::WindowConfig;
use crate::core::data::client_size::ClientSize;
use crate::core::events::message::{Message, ids};
use crate::core::events::outcome::Outcome;
use crate::core::render::ports::surface::SurfaceFactoryPort;

/// The platform side of a window: message queue, window creation and
/// surfaces.
pub trait HostPort {
    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowContext, HostError>;

    fn create_surface_factory(&mut self) -> Result<Box<dyn SurfaceFactoryPort>, HostError>;

    /// Next pending message, without blocking.
    fn poll_message(&mut self) -> Option<Message>;

    /// Blocks for at most `timeout` waiting for a message.
    fn wait_message(&mut self, timeout: Duration) -> Option<Message>;

    fn post_message(&mut self, message: Message);

    fn client_size(&self) -> ClientSize;

    /// Marks the whole client area as needing a repaint.
    fn invalidate_client_area(&mut self);

    fn request_quit(&mut self, exit_code: i32);

    /// Processing for messages no handler is registered for.
    ///
    /// `CLOSE` is turned into a posted `DESTROY`; everything else is
    /// ignored.
    fn default_message(&mut self, message: &Message) -> Outcome {
        match message.id {
            ids::CLOSE => {
                self.post_message(Message::new(ids::DESTROY));
                Outcome::Handled
            }
            _ => Outcome::Ignored,
        }
    }
}
