use std::collections::VecDeque;
use std::time::Duration;

use log::{info, warn};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use crate::controllers::window::errors::HostError;
use crate::controllers::window::ports::host::HostPort;
use crate::core::components::context::WindowContext;
use crate::core::config::window_config::WindowConfig;
use crate::core::data::client_size::ClientSize;
use crate::core::events::message::{Message, MessageArgs, MouseButton, ids};
use crate::core::render::ports::surface::SurfaceFactoryPort;
use crate::presenters::pixels::factory::PixelsSurfaceFactory;

/// Host backed by a winit event loop that is pumped, never handed over, so
/// the window controller keeps ownership of the loop.
pub struct WinitHost {
    event_loop: EventLoop<()>,
    window: Option<&'static Window>,
    queue: VecDeque<Message>,
    client_size: ClientSize,
    exit_code: Option<i32>,
}

impl WinitHost {
    pub fn new() -> Result<Self, HostError> {
        let event_loop = EventLoop::new().map_err(|error| HostError::EventLoop(error.to_string()))?;

        Ok(Self {
            event_loop,
            window: None,
            queue: VecDeque::new(),
            client_size: ClientSize::default(),
            exit_code: None,
        })
    }

    /// The code passed to `request_quit`, once the window asked to quit.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    fn pump(&mut self, timeout: Duration) {
        let Some(window_id) = self.window.map(Window::id) else {
            return;
        };
        let queue = &mut self.queue;
        let client_size = &mut self.client_size;

        let status = self.event_loop.pump_events(Some(timeout), |event, _| {
            let Event::WindowEvent { window_id: id, event } = event else {
                return;
            };
            if id != window_id {
                return;
            }
            if let Some(message) = translate(&event) {
                if let MessageArgs::Size(size) = message.args {
                    *client_size = size;
                }
                queue.push_back(message);
            }
        });

        if let PumpStatus::Exit(code) = status {
            warn!("winit event loop exited with code {code}");
            self.queue.push_back(Message::new(ids::DESTROY));
        }
    }
}

impl HostPort for WinitHost {
    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowContext, HostError> {
        let window = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(f64::from(config.width), f64::from(config.height)))
            .with_min_inner_size(LogicalSize::new(f64::from(config.min_width), f64::from(config.min_height)))
            .build(&self.event_loop)
            .map_err(|error| HostError::WindowCreation(error.to_string()))?;

        // pixels needs a 'static window, and the window lives as long as the process
        let window: &'static Window = Box::leak(Box::new(window));
        let size = window.inner_size();
        self.client_size = ClientSize::new(size.width, size.height);
        self.window = Some(window);

        info!("window \"{}\" created at {}x{}", config.title, size.width, size.height);
        Ok(WindowContext::new(config.title.clone(), self.client_size))
    }

    fn create_surface_factory(&mut self) -> Result<Box<dyn SurfaceFactoryPort>, HostError> {
        let window = self
            .window
            .ok_or_else(|| HostError::SurfaceFactory("window has not been created".to_string()))?;
        Ok(Box::new(PixelsSurfaceFactory::new(window)))
    }

    fn poll_message(&mut self) -> Option<Message> {
        if self.queue.is_empty() {
            self.pump(Duration::ZERO);
        }
        self.queue.pop_front()
    }

    fn wait_message(&mut self, timeout: Duration) -> Option<Message> {
        if self.queue.is_empty() {
            self.pump(timeout);
        }
        self.queue.pop_front()
    }

    fn post_message(&mut self, message: Message) {
        self.queue.push_back(message);
    }

    fn client_size(&self) -> ClientSize {
        self.client_size
    }

    fn invalidate_client_area(&mut self) {
        if let Some(window) = self.window {
            window.request_redraw();
        }
    }

    fn request_quit(&mut self, exit_code: i32) {
        self.exit_code = Some(exit_code);
    }
}

/// Maps a winit window event onto a toolkit message.
fn translate(event: &WindowEvent) -> Option<Message> {
    let message = match event {
        WindowEvent::CloseRequested => Message::new(ids::CLOSE),
        WindowEvent::Destroyed => Message::new(ids::DESTROY),
        WindowEvent::Resized(size) => Message::resize(ClientSize::new(size.width, size.height)),
        WindowEvent::Moved(position) => Message::with_args(
            ids::MOVE,
            MessageArgs::Point {
                x: f64::from(position.x),
                y: f64::from(position.y),
            },
        ),
        WindowEvent::Focused(true) => Message::with_args(ids::SET_FOCUS, MessageArgs::Focus(true)),
        WindowEvent::Focused(false) => Message::with_args(ids::KILL_FOCUS, MessageArgs::Focus(false)),
        WindowEvent::RedrawRequested => Message::new(ids::PAINT),
        WindowEvent::CursorMoved { position, .. } => Message::with_args(
            ids::MOUSE_MOVE,
            MessageArgs::Point {
                x: position.x,
                y: position.y,
            },
        ),
        WindowEvent::MouseInput { state, button, .. } => {
            let id = match state {
                ElementState::Pressed => ids::MOUSE_DOWN,
                ElementState::Released => ids::MOUSE_UP,
            };
            Message::with_args(id, MessageArgs::Button(mouse_button(*button)))
        }
        _ => return None,
    };
    Some(message)
}

fn mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(code) => MouseButton::Other(code),
    }
}
