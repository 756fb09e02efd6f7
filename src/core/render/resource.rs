use log::{debug, info};

use crate::core::data::client_size::ClientSize;
use crate::core::render::errors::RenderError;
use crate::core::render::lifecycle::{LifecycleEvent, LossReason};
use crate::core::render::ports::surface::SurfaceFactoryPort;
use crate::core::render::target::RenderTarget;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResourceState {
    Absent,
    Valid,
}

/// The render target together with the factory that can rebuild it.
///
/// Creation is lazy: `ensure_valid` builds a target on first need. Every
/// teardown hands back the `LifecycleEvent` that has to be broadcast to the
/// components before the next draw.
pub struct RenderResource {
    factory: Option<Box<dyn SurfaceFactoryPort>>,
    target: Option<RenderTarget>,
    generation: u64,
}

impl RenderResource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            factory: None,
            target: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn with_factory(factory: Box<dyn SurfaceFactoryPort>) -> Self {
        let mut resource = Self::new();
        resource.attach_factory(factory);
        resource
    }

    /// Installs the surface factory. Any existing target is kept.
    pub fn attach_factory(&mut self, factory: Box<dyn SurfaceFactoryPort>) {
        self.factory = Some(factory);
    }

    #[must_use]
    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    #[must_use]
    pub fn state(&self) -> ResourceState {
        if self.target.is_some() {
            ResourceState::Valid
        } else {
            ResourceState::Absent
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state() == ResourceState::Valid
    }

    /// Generation of the most recently created target, 0 before the first.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn target(&self) -> Option<&RenderTarget> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut RenderTarget> {
        self.target.as_mut()
    }

    /// Returns the current target, creating one of `size` if absent.
    pub fn ensure_valid(&mut self, size: ClientSize) -> Result<&mut RenderTarget, RenderError> {
        let target = match self.target.take() {
            Some(target) => target,
            None => self.create_target(size)?,
        };
        Ok(self.target.insert(target))
    }

    /// Drops the current target, if any.
    ///
    /// Returns the event announcing the loss; `None` when already absent.
    pub fn teardown(&mut self, reason: LossReason) -> Option<LifecycleEvent> {
        let target = self.target.take()?;
        let generation = target.generation();
        drop(target);

        info!("render target generation {generation} torn down ({reason:?})");

        Some(LifecycleEvent::RenderTargetLost { generation, reason })
    }

    fn create_target(&mut self, size: ClientSize) -> Result<RenderTarget, RenderError> {
        if size.is_empty() {
            return Err(RenderError::EmptyClientArea);
        }
        let factory = self.factory.as_mut().ok_or(RenderError::NoFactory)?;
        let surface = factory.create_surface(size)?;

        self.generation += 1;
        debug!(
            "render target generation {} created at {}x{}",
            self.generation, size.width, size.height
        );

        Ok(RenderTarget::new(self.generation, surface))
    }
}

impl Default for RenderResource {
    fn default() -> Self {
        Self::new()
    }
}
