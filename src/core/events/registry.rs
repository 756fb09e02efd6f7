use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::core::events::event::{Event, EventId, Handler};
use crate::core::events::message::{Message, MessageId};
use crate::core::events::outcome::Outcome;
use crate::core::events::priority::Priority;

/// Message id to handler list mapping.
///
/// Each bucket is kept sorted by ascending priority. A new registration is
/// inserted after every existing entry of equal priority, so dispatching a
/// bucket back to front runs the highest priority first and, among equal
/// priorities, the most recent registration first.
pub struct EventRegistry<T> {
    buckets: HashMap<MessageId, Vec<Event<T>>>,
    last_id: u64,
}

impl<T> EventRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            last_id: EventId::LAST_RESERVED,
        }
    }

    /// Registers `handler` for `message` and returns a fresh id.
    pub fn register<F>(&mut self, message: MessageId, priority: Priority, handler: F) -> EventId
    where
        F: Fn(&mut T, &Message) -> Outcome + 'static,
    {
        self.insert(message, Rc::new(handler), None, priority)
    }

    /// Registers a handler that needs a registrant-owned context.
    ///
    /// Only a weak handle to `context` is kept: the registrant stays the
    /// owner and must keep it alive for as long as the registration should
    /// fire. Once the context is dropped the handler is skipped.
    pub fn register_with_context<C, F>(
        &mut self,
        message: MessageId,
        context: &Rc<RefCell<C>>,
        priority: Priority,
        handler: F,
    ) -> EventId
    where
        C: 'static,
        F: Fn(&mut T, &Message, &mut C) -> Outcome + 'static,
    {
        let weak = Rc::downgrade(context);
        let erased: Weak<dyn Any> = weak.clone();

        let wrapped = move |target: &mut T, message: &Message| -> Outcome {
            let Some(context) = weak.upgrade() else {
                return Outcome::Skipped;
            };
            let Ok(mut context) = context.try_borrow_mut() else {
                warn!("handler context for message {:#06x} is already borrowed", message.id);
                return Outcome::Skipped;
            };
            handler(target, message, &mut context)
        };

        self.insert(message, Rc::new(wrapped), Some(erased), priority)
    }

    /// Removes the registration with `id` from whichever bucket holds it.
    ///
    /// Returns false, leaving the registry untouched, if `id` is unknown.
    pub fn unregister(&mut self, id: EventId) -> bool {
        let mut emptied = None;
        let mut removed = false;

        for (message, bucket) in &mut self.buckets {
            if let Some(index) = bucket.iter().position(|event| event.id() == id) {
                bucket.remove(index);
                removed = true;
                if bucket.is_empty() {
                    emptied = Some(*message);
                }
                break;
            }
        }

        if let Some(message) = emptied {
            self.buckets.remove(&message);
        }
        if removed {
            debug!("unregistered event {id}");
        }

        removed
    }

    /// Drops every registration whose context no longer exists.
    pub fn prune_dead_contexts(&mut self) -> usize {
        let mut pruned = 0;

        self.buckets.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(Event::is_context_alive);
            pruned += before - bucket.len();
            !bucket.is_empty()
        });

        if pruned > 0 {
            debug!("pruned {pruned} events with dropped contexts");
        }

        pruned
    }

    /// A copy of the bucket for `message` in stored (ascending) order.
    #[must_use]
    pub fn snapshot(&self, message: MessageId) -> Option<Vec<Event<T>>> {
        self.buckets.get(&message).cloned()
    }

    #[must_use]
    pub fn handler_count(&self, message: MessageId) -> usize {
        self.buckets.get(&message).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.buckets
            .values()
            .any(|bucket| bucket.iter().any(|event| event.id() == id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn insert(
        &mut self,
        message: MessageId,
        handler: Handler<T>,
        context: Option<Weak<dyn Any>>,
        priority: Priority,
    ) -> EventId {
        self.last_id += 1;
        let id = EventId::from_raw(self.last_id);

        let bucket = self.buckets.entry(message).or_default();
        let index = bucket.partition_point(|event| event.priority() <= priority);
        bucket.insert(index, Event::new(handler, context, priority, id));

        debug!(
            "registered event {id} for message {message:#06x} at priority {}",
            priority.value()
        );

        id
    }
}

impl<T> Default for EventRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::message::ids;

    #[derive(Default)]
    struct Target {
        calls: Vec<&'static str>,
    }

    fn record(name: &'static str) -> impl Fn(&mut Target, &Message) -> Outcome {
        move |target: &mut Target, _: &Message| {
            target.calls.push(name);
            Outcome::Handled
        }
    }

    fn priorities(registry: &EventRegistry<Target>, message: MessageId) -> Vec<i16> {
        registry
            .snapshot(message)
            .expect("bucket exists")
            .iter()
            .map(|event| event.priority().value())
            .collect()
    }

    #[test]
    fn first_id_is_above_reserved_range() {
        let mut registry = EventRegistry::<Target>::new();

        let id = registry.register(ids::PAINT, Priority::NORMAL, record("a"));

        assert_eq!(id.raw(), EventId::LAST_RESERVED + 1);
    }

    #[test]
    fn ids_are_unique_across_buckets() {
        let mut registry = EventRegistry::<Target>::new();

        let a = registry.register(ids::PAINT, Priority::NORMAL, record("a"));
        let b = registry.register(ids::RESIZE, Priority::NORMAL, record("b"));
        let c = registry.register(ids::PAINT, Priority::HIGHEST, record("c"));

        assert!(a < b && b < c);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn buckets_are_sorted_by_ascending_priority() {
        let mut registry = EventRegistry::<Target>::new();

        for value in [3, -1, 0, 7, -5, 0] {
            registry.register(ids::PAINT, Priority(value), record("x"));
        }

        assert_eq!(priorities(&registry, ids::PAINT), vec![-5, -1, 0, 0, 3, 7]);
    }

    #[test]
    fn equal_priorities_are_appended_after_existing_entries() {
        let mut registry = EventRegistry::<Target>::new();

        let first = registry.register(ids::PAINT, Priority::NORMAL, record("first"));
        registry.register(ids::PAINT, Priority::HIGHER, record("higher"));
        let second = registry.register(ids::PAINT, Priority::NORMAL, record("second"));

        let order: Vec<EventId> = registry
            .snapshot(ids::PAINT)
            .expect("bucket exists")
            .iter()
            .map(Event::id)
            .collect();

        assert_eq!(order[0], first);
        assert_eq!(order[1], second);
    }

    #[test]
    fn unregister_unknown_id_returns_false_and_keeps_registry() {
        let mut registry = EventRegistry::<Target>::new();
        registry.register(ids::PAINT, Priority::NORMAL, record("a"));

        assert!(!registry.unregister(EventId::from_raw(999)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.handler_count(ids::PAINT), 1);
    }

    #[test]
    fn unregister_removes_only_the_matching_event() {
        let mut registry = EventRegistry::<Target>::new();
        let a = registry.register(ids::PAINT, Priority::NORMAL, record("a"));
        let b = registry.register(ids::PAINT, Priority::NORMAL, record("b"));

        assert!(registry.unregister(a));
        assert!(!registry.contains(a));
        assert!(registry.contains(b));
        assert!(!registry.unregister(a));
    }

    #[test]
    fn emptied_bucket_is_dropped() {
        let mut registry = EventRegistry::<Target>::new();
        let a = registry.register(ids::CLOSE, Priority::NORMAL, record("a"));

        assert!(registry.unregister(a));
        assert!(registry.snapshot(ids::CLOSE).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn dead_contexts_are_pruned() {
        let mut registry = EventRegistry::<Target>::new();
        let context = Rc::new(RefCell::new(0_u32));

        let tied = registry.register_with_context(
            ids::PAINT,
            &context,
            Priority::NORMAL,
            |_, _, count: &mut u32| {
                *count += 1;
                Outcome::Handled
            },
        );
        let free = registry.register(ids::PAINT, Priority::NORMAL, record("free"));

        assert_eq!(registry.prune_dead_contexts(), 0);

        drop(context);

        assert_eq!(registry.prune_dead_contexts(), 1);
        assert!(!registry.contains(tied));
        assert!(registry.contains(free));
    }

    #[test]
    fn context_handler_is_skipped_after_context_drops() {
        let mut registry = EventRegistry::<Target>::new();
        let context = Rc::new(RefCell::new(0_u32));
        registry.register_with_context(ids::PAINT, &context, Priority::NORMAL, |_, _, count: &mut u32| {
            *count += 1;
            Outcome::Handled
        });

        let events = registry.snapshot(ids::PAINT).expect("bucket exists");
        let mut target = Target::default();
        let message = Message::new(ids::PAINT);

        assert_eq!(events[0].invoke(&mut target, &message), Outcome::Handled);
        assert_eq!(*context.borrow(), 1);

        drop(context);

        assert!(!events[0].is_context_alive());
        assert_eq!(events[0].invoke(&mut target, &message), Outcome::Skipped);
    }
}
