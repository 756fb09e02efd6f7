use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::window::errors::WindowError;
use crate::controllers::window::ports::host::HostPort;
use crate::controllers::window::stats::FrameStats;
use crate::core::components::component::{Component, ComponentId};
use crate::core::components::context::WindowContext;
use crate::core::components::registry::ComponentRegistry;
use crate::core::config::errors::ConfigError;
use crate::core::config::window_config::WindowConfig;
use crate::core::events::dispatcher::{self, DispatchTarget};
use crate::core::events::message::{Message, ids};
use crate::core::events::outcome::Outcome;
use crate::core::events::priority::Priority;
use crate::core::events::registry::EventRegistry;
use crate::core::render::lifecycle::{LifecycleEvent, LossReason};
use crate::core::render::resource::RenderResource;
use crate::core::timing::frame_clock::FrameClock;

mod handlers;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControllerState {
    Created,
    Initialized,
    Running,
    Stopped,
}

/// One window: its message loop, event bus, components and render target.
///
/// The controller is the dispatch target of its own registry, so handlers
/// receive `&mut WindowController` and can reach the components, the
/// render resource and the host.
pub struct WindowController<H: HostPort> {
    host: H,
    config: WindowConfig,
    window: WindowContext,
    events: EventRegistry<Self>,
    components: ComponentRegistry,
    resource: RenderResource,
    clock: FrameClock,
    state: ControllerState,
    running: bool,
    stats: FrameStats,
}

impl<H: HostPort + 'static> WindowController<H> {
    pub fn new(host: H, config: WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;
        let clock = FrameClock::new(config.fps)?;
        let window = WindowContext::new(config.title.clone(), config.size());

        Ok(Self {
            host,
            config,
            window,
            events: EventRegistry::new(),
            components: ComponentRegistry::new(),
            resource: RenderResource::new(),
            clock,
            state: ControllerState::Created,
            running: false,
            stats: FrameStats::default(),
        })
    }

    /// Creates the host window and the surface factory, then registers the
    /// built-in handlers. Failing to create either is fatal and leaves the
    /// controller in `Created`, so `initialize` may be retried.
    pub fn initialize(&mut self) -> Result<(), WindowError> {
        if self.state != ControllerState::Created {
            return Err(WindowError::AlreadyInitialized);
        }

        let window = self.host.create_window(&self.config)?;
        let factory = self.host.create_surface_factory()?;
        self.window = window;
        self.resource.attach_factory(factory);

        self.events.register(ids::DESTROY, Priority::HIGHEST, Self::on_destroy);
        self.events.register(ids::FRAME_UPDATE, Priority::NORMAL, Self::on_paint);
        self.events.register(ids::RESIZE, Priority::NORMAL, Self::on_resize);

        self.state = ControllerState::Initialized;
        info!(
            "window \"{}\" initialized at {}x{}, {} fps",
            self.window.title,
            self.window.client_size.width,
            self.window.client_size.height,
            self.clock.fps()
        );
        Ok(())
    }

    /// Runs the message loop until the window is destroyed or `stop` is
    /// called.
    pub fn run(&mut self) -> Result<(), WindowError> {
        self.start(Instant::now())?;

        while self.run_iteration(Instant::now()) {}

        info!(
            "window \"{}\" stopped after {} frames",
            self.window.title, self.stats.frames_presented
        );
        Ok(())
    }

    /// Enters the running state and anchors the frame clock at `now`.
    ///
    /// `Stopped` is terminal: a destroyed window cannot be started again.
    pub fn start(&mut self, now: Instant) -> Result<(), WindowError> {
        match self.state {
            ControllerState::Created => Err(WindowError::NotInitialized),
            ControllerState::Stopped => Err(WindowError::Stopped),
            ControllerState::Running => Ok(()),
            ControllerState::Initialized => {
                self.running = true;
                self.state = ControllerState::Running;
                self.clock.reset(now);
                Ok(())
            }
        }
    }

    /// One pass of the loop with an explicit clock reading.
    ///
    /// Pending host messages are dispatched first. Then, if a frame is
    /// due, the client area is invalidated and `FRAME_UPDATE` is posted to
    /// the host queue; otherwise the host is waited on until the next frame
    /// deadline. Returns whether the loop is still running.
    pub fn run_iteration(&mut self, now: Instant) -> bool {
        while self.running {
            let Some(message) = self.host.poll_message() else {
                break;
            };
            self.dispatch(&message);
        }

        if !self.running {
            return false;
        }

        if self.clock.tick(now) {
            self.host.invalidate_client_area();
            self.host.post_message(Message::new(ids::FRAME_UPDATE));
        } else {
            let timeout = self.clock.time_until_next_frame(now);
            if let Some(message) = self.host.wait_message(timeout) {
                self.dispatch(&message);
            }
        }

        self.running
    }

    /// Stops the loop. Calling it again, or before `run`, does nothing.
    pub fn stop(&mut self) {
        self.running = false;
        if self.state == ControllerState::Running {
            self.state = ControllerState::Stopped;
            debug!("window \"{}\" stopping", self.window.title);
        }
    }

    pub fn dispatch(&mut self, message: &Message) -> Outcome {
        dispatcher::dispatch(self, message)
    }

    pub fn add_component(&mut self, component: Box<dyn Component>, z_index: i32) -> Option<ComponentId> {
        self.components.add(component, z_index, &self.window)
    }

    pub fn remove_component(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        self.components.remove(id)
    }

    #[must_use]
    pub fn component(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components.get(id)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut (dyn Component + 'static)> {
        self.components.get_mut(id)
    }

    pub fn set_component_z_index(&mut self, id: ComponentId, z_index: i32) -> bool {
        self.components.set_z_index(id, z_index, &self.window)
    }

    #[must_use]
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn events_mut(&mut self) -> &mut EventRegistry<Self> {
        &mut self.events
    }

    pub fn set_fps(&mut self, fps: u32) -> Result<(), ConfigError> {
        self.clock.set_fps(fps)?;
        self.config.fps = fps;
        Ok(())
    }

    #[must_use]
    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    #[must_use]
    pub fn time_between_frames(&self) -> Duration {
        self.clock.interval()
    }

    pub fn set_time_between_frames(&mut self, interval: Duration) -> Result<(), ConfigError> {
        self.clock.set_time_between_frames(interval)?;
        self.config.fps = self.clock.fps();
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn window(&self) -> &WindowContext {
        &self.window
    }

    #[must_use]
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    #[must_use]
    pub fn render_resource(&self) -> &RenderResource {
        &self.resource
    }

    #[must_use]
    pub fn frame_stats(&self) -> &FrameStats {
        &self.stats
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tears the render target down and has every drawable forget what it
    /// created on it. The drawables are reconstructed even when no target
    /// existed.
    fn lose_render_target(&mut self, reason: LossReason) {
        let event = self
            .resource
            .teardown(reason)
            .unwrap_or(LifecycleEvent::RenderTargetLost {
                generation: self.resource.generation(),
                reason,
            });
        let reached = self.components.broadcast(&event);
        self.stats.reconstruct_passes += 1;
        debug!("reconstructed {reached} drawable components after {reason:?}");
    }
}

impl<H: HostPort> DispatchTarget for WindowController<H> {
    fn events(&self) -> &EventRegistry<Self> {
        &self.events
    }

    fn default_message(&mut self, message: &Message) -> Outcome {
        self.host.default_message(message)
    }
}
