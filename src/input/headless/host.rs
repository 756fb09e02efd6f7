use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use log::info;

use crate::controllers::window::errors::HostError;
use crate::controllers::window::ports::host::HostPort;
use crate::core::components::context::WindowContext;
use crate::core::config::window_config::WindowConfig;
use crate::core::data::client_size::ClientSize;
use crate::core::events::message::Message;
use crate::core::render::ports::surface::SurfaceFactoryPort;
use crate::presenters::headless::surface::{HeadlessSurfaceFactory, SharedDevice};

/// A host without a window system.
///
/// Messages come from a scripted queue and never block; everything the
/// controller asks of the host is recorded for inspection.
#[derive(Default)]
pub struct HeadlessHost {
    queue: VecDeque<Message>,
    posted: Vec<Message>,
    client_size: ClientSize,
    invalidations: u32,
    quit_code: Option<i32>,
    device: SharedDevice,
    fail_window_creation: bool,
    window_created: bool,
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `message` as if the platform had delivered it.
    pub fn push_message(&mut self, message: Message) {
        self.queue.push_back(message);
    }

    /// Changes the client size and queues the matching `RESIZE`.
    pub fn resize(&mut self, size: ClientSize) {
        self.client_size = size;
        self.queue.push_back(Message::resize(size));
    }

    pub fn fail_window_creation(&mut self) {
        self.fail_window_creation = true;
    }

    pub fn allow_window_creation(&mut self) {
        self.fail_window_creation = false;
    }

    /// Messages posted through `post_message`, oldest first.
    #[must_use]
    pub fn posted(&self) -> &[Message] {
        &self.posted
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn invalidations(&self) -> u32 {
        self.invalidations
    }

    #[must_use]
    pub fn quit_code(&self) -> Option<i32> {
        self.quit_code
    }

    #[must_use]
    pub fn window_created(&self) -> bool {
        self.window_created
    }

    /// The device behind every surface this host hands out.
    #[must_use]
    pub fn device(&self) -> SharedDevice {
        Rc::clone(&self.device)
    }
}

impl HostPort for HeadlessHost {
    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowContext, HostError> {
        if self.fail_window_creation {
            return Err(HostError::WindowCreation("headless window creation disabled".to_string()));
        }

        self.client_size = config.size();
        self.window_created = true;
        info!(
            "headless window \"{}\" created at {}x{}",
            config.title, config.width, config.height
        );

        Ok(WindowContext::new(config.title.clone(), self.client_size))
    }

    fn create_surface_factory(&mut self) -> Result<Box<dyn SurfaceFactoryPort>, HostError> {
        Ok(Box::new(HeadlessSurfaceFactory::new(self.device())))
    }

    fn poll_message(&mut self) -> Option<Message> {
        self.queue.pop_front()
    }

    fn wait_message(&mut self, _timeout: Duration) -> Option<Message> {
        self.queue.pop_front()
    }

    fn post_message(&mut self, message: Message) {
        self.posted.push(message);
        self.queue.push_back(message);
    }

    fn client_size(&self) -> ClientSize {
        self.client_size
    }

    fn invalidate_client_area(&mut self) {
        self.invalidations += 1;
    }

    fn request_quit(&mut self, exit_code: i32) {
        self.quit_code = Some(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::message::ids;
    use crate::core::events::outcome::Outcome;

    #[test]
    fn posted_messages_are_recorded_and_queued() {
        let mut host = HeadlessHost::new();

        host.post_message(Message::new(ids::FRAME_UPDATE));

        assert_eq!(host.posted(), &[Message::new(ids::FRAME_UPDATE)]);
        assert_eq!(host.poll_message(), Some(Message::new(ids::FRAME_UPDATE)));
        assert_eq!(host.poll_message(), None);
    }

    #[test]
    fn default_close_posts_destroy() {
        let mut host = HeadlessHost::new();

        let outcome = host.default_message(&Message::new(ids::CLOSE));

        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(host.posted(), &[Message::new(ids::DESTROY)]);
    }

    #[test]
    fn default_for_other_messages_is_ignored() {
        let mut host = HeadlessHost::new();

        assert_eq!(host.default_message(&Message::new(ids::MOUSE_MOVE)), Outcome::Ignored);
        assert!(host.posted().is_empty());
    }

    #[test]
    fn window_takes_configured_size() {
        let mut host = HeadlessHost::new();
        let config = WindowConfig::default().with_title("t").with_size(320, 200);

        let window = host.create_window(&config).expect("created");

        assert_eq!(window.client_size, ClientSize::new(320, 200));
        assert_eq!(host.client_size(), ClientSize::new(320, 200));
        assert!(host.window_created());
    }

    #[test]
    fn window_creation_failure_is_reported() {
        let mut host = HeadlessHost::new();
        host.fail_window_creation();

        let result = host.create_window(&WindowConfig::default());

        assert!(matches!(result, Err(HostError::WindowCreation(_))));
    }
}
