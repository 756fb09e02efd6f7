use std::collections::BTreeMap;

use log::{debug, warn};

use crate::core::components::component::{Component, ComponentId};
use crate::core::components::context::WindowContext;
use crate::core::render::lifecycle::LifecycleEvent;
use crate::core::render::target::RenderTarget;

struct Entry {
    component: Box<dyn Component>,
    id: ComponentId,
}

/// Owns a window's components, grouped by z-index.
///
/// Iteration runs from the lowest z-index to the highest and, inside one
/// z-index, in insertion order. Lower z-indices are therefore drawn first
/// and end up underneath.
pub struct ComponentRegistry {
    layers: BTreeMap<i32, Vec<Entry>>,
    last_id: u64,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: BTreeMap::new(),
            last_id: ComponentId::LAST_RESERVED,
        }
    }

    /// Initializes `component` against `window` and takes ownership of it.
    ///
    /// A component whose `initialize` returns false is dropped and no id is
    /// produced.
    pub fn add(&mut self, mut component: Box<dyn Component>, z_index: i32, window: &WindowContext) -> Option<ComponentId> {
        if !component.initialize(window) {
            debug!("component rejected during initialize at z-index {z_index}");
            return None;
        }

        self.last_id += 1;
        let id = ComponentId::from_raw(self.last_id);
        self.layers.entry(z_index).or_default().push(Entry { component, id });

        debug!("added {id} at z-index {z_index}");
        Some(id)
    }

    /// Takes `id` out of the registry and hands ownership back.
    pub fn remove(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        self.take(id).map(|(entry, _)| entry.component)
    }

    #[must_use]
    pub fn get(&self, id: ComponentId) -> Option<&dyn Component> {
        self.layers
            .values()
            .flatten()
            .find(|entry| entry.id == id)
            .map(|entry| entry.component.as_ref())
    }

    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut (dyn Component + 'static)> {
        self.layers
            .values_mut()
            .flatten()
            .find(|entry| entry.id == id)
            .map(|entry| entry.component.as_mut())
    }

    #[must_use]
    pub fn z_index_of(&self, id: ComponentId) -> Option<i32> {
        self.layers
            .iter()
            .find(|(_, entries)| entries.iter().any(|entry| entry.id == id))
            .map(|(z_index, _)| *z_index)
    }

    /// Moves `id` to `z_index`, keeping its id and its state.
    ///
    /// The component is re-initialized against `window` on the way in, as
    /// for `add`. Returns false if `id` is unknown, or if re-initialization
    /// refused, in which case the component is dropped.
    pub fn set_z_index(&mut self, id: ComponentId, z_index: i32, window: &WindowContext) -> bool {
        let Some((mut entry, old_z_index)) = self.take(id) else {
            return false;
        };

        if !entry.component.initialize(window) {
            warn!("{id} refused re-initialization while moving from z-index {old_z_index} to {z_index}, dropped");
            return false;
        }

        self.layers.entry(z_index).or_default().push(entry);
        debug!("moved {id} from z-index {old_z_index} to {z_index}");
        true
    }

    pub fn for_each_in_z_order<F>(&self, mut visitor: F)
    where
        F: FnMut(ComponentId, &dyn Component),
    {
        for entry in self.layers.values().flatten() {
            visitor(entry.id, entry.component.as_ref());
        }
    }

    pub fn for_each_in_z_order_mut<F>(&mut self, mut visitor: F)
    where
        F: FnMut(ComponentId, &mut dyn Component),
    {
        for entry in self.layers.values_mut().flatten() {
            visitor(entry.id, entry.component.as_mut());
        }
    }

    /// Draws every drawable component in z-order and returns how many drew
    /// successfully. A failing component is logged and skipped.
    pub fn draw_all(&mut self, window: &WindowContext, target: &mut RenderTarget) -> usize {
        let mut drawn = 0;

        for entry in self.layers.values_mut().flatten() {
            let Some(drawable) = entry.component.as_drawable_mut() else {
                continue;
            };
            match drawable.draw(window, target) {
                Ok(()) => drawn += 1,
                Err(error) => warn!("{} failed to draw: {error}", entry.id),
            }
        }

        drawn
    }

    /// Delivers a lifecycle event to every drawable component and returns
    /// how many were reached.
    pub fn broadcast(&mut self, event: &LifecycleEvent) -> usize {
        let mut reached = 0;

        match event {
            LifecycleEvent::RenderTargetLost { .. } => {
                for entry in self.layers.values_mut().flatten() {
                    if let Some(drawable) = entry.component.as_drawable_mut() {
                        drawable.reconstruct();
                        reached += 1;
                    }
                }
            }
        }

        debug!("{event:?} delivered to {reached} drawable components");
        reached
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    fn take(&mut self, id: ComponentId) -> Option<(Entry, i32)> {
        let z_index = self.z_index_of(id)?;
        let entries = self.layers.get_mut(&z_index)?;
        let index = entries.iter().position(|entry| entry.id == id)?;
        let entry = entries.remove(index);

        if entries.is_empty() {
            self.layers.remove(&z_index);
        }

        Some((entry, z_index))
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
