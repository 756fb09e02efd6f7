use log::{trace, warn};

use super::WindowController;
use crate::controllers::window::ports::host::HostPort;
use crate::core::events::message::Message;
use crate::core::events::outcome::Outcome;
use crate::core::render::errors::SurfaceError;
use crate::core::render::lifecycle::LossReason;

impl<H: HostPort + 'static> WindowController<H> {
    pub(super) fn on_destroy(&mut self, _message: &Message) -> Outcome {
        self.stop();
        self.host.request_quit(0);
        Outcome::Handled
    }

    /// Draws one frame: clear, components in z-order, present.
    pub(super) fn on_paint(&mut self, _message: &Message) -> Outcome {
        let size = self.window.client_size;
        if size.is_empty() {
            trace!("skipping paint for empty client area");
            return Outcome::Skipped;
        }

        let target = match self.resource.ensure_valid(size) {
            Ok(target) => target,
            Err(error) => {
                warn!("cannot paint, render target unavailable: {error}");
                self.stats.record_failure(error);
                return Outcome::Failed;
            }
        };

        target.begin_draw();
        if let Err(error) = target.clear(self.config.clear_colour) {
            warn!("failed to clear render target: {error}");
        }
        self.components.draw_all(&self.window, target);

        match target.end_draw() {
            Ok(()) => {
                self.stats.frames_presented += 1;
                Outcome::Handled
            }
            Err(SurfaceError::DeviceLost) => {
                warn!("render device lost, recreating render target on next frame");
                self.stats.device_losses += 1;
                self.lose_render_target(LossReason::DeviceLost);
                Outcome::DeviceLost
            }
            Err(error) => {
                warn!("failed to present frame: {error}");
                self.stats.record_failure(error);
                Outcome::Failed
            }
        }
    }

    /// Rebuilds the render target at the new client size.
    ///
    /// A zero-area client, as for a minimised window, leaves the target
    /// absent until the next non-empty resize or paint.
    pub(super) fn on_resize(&mut self, message: &Message) -> Outcome {
        let size = message.size().unwrap_or_else(|| self.host.client_size());
        self.window.client_size = size;

        self.lose_render_target(LossReason::Resize);

        if size.is_empty() {
            trace!("client area is empty, render target stays absent");
            return Outcome::Handled;
        }

        match self.resource.ensure_valid(size) {
            Ok(_) => Outcome::Handled,
            Err(error) => {
                warn!("failed to recreate render target after resize: {error}");
                self.stats.record_failure(error);
                Outcome::Failed
            }
        }
    }
}
