use std::any::Any;
use std::fmt;

use crate::core::components::context::WindowContext;
use crate::core::render::errors::RenderError;
use crate::core::render::target::RenderTarget;

/// Identifies a component inside one `ComponentRegistry`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Ids up to and including this value are never handed out.
    pub const LAST_RESERVED: u64 = 0xF;

    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

/// Anything that can live in a window's component tree.
pub trait Component: Any {
    /// Called whenever the component is (re)inserted into a window.
    /// Returning false rejects the component.
    fn initialize(&mut self, _window: &WindowContext) -> bool {
        true
    }

    /// The drawable view of this component, if it draws at all.
    fn as_drawable_mut(&mut self) -> Option<&mut dyn Drawable> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A component that paints itself onto the render target.
pub trait Drawable {
    /// Draws onto `target`, which is inside a `begin_draw` pass.
    fn draw(&mut self, window: &WindowContext, target: &mut RenderTarget) -> Result<(), RenderError>;

    /// Forgets every resource created on a render target that is gone.
    fn reconstruct(&mut self);
}

impl dyn Component + '_ {
    #[must_use]
    pub fn downcast_ref<C: Component>(&self) -> Option<&C> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.as_any_mut().downcast_mut()
    }
}
