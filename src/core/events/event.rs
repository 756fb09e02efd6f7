use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::core::events::message::Message;
use crate::core::events::outcome::Outcome;
use crate::core::events::priority::Priority;

/// Identifier of a handler registration.
///
/// Ids are unique across a whole registry and never reused. Values
/// `0..=LAST_RESERVED` are reserved for the system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u64);

impl EventId {
    pub const LAST_RESERVED: u64 = 0xF;

    #[must_use]
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A handler invoked with the dispatch target and the message.
pub type Handler<T> = Rc<dyn Fn(&mut T, &Message) -> Outcome>;

/// One handler registration.
pub struct Event<T> {
    handler: Handler<T>,
    context: Option<Weak<dyn Any>>,
    priority: Priority,
    id: EventId,
}

impl<T> Event<T> {
    pub(crate) fn new(
        handler: Handler<T>,
        context: Option<Weak<dyn Any>>,
        priority: Priority,
        id: EventId,
    ) -> Self {
        Self {
            handler,
            context,
            priority,
            id,
        }
    }

    #[must_use]
    pub fn id(&self) -> EventId {
        self.id
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// False once the registrant has dropped the context this event was
    /// registered with. Context-free events are always alive.
    #[must_use]
    pub fn is_context_alive(&self) -> bool {
        self.context
            .as_ref()
            .is_none_or(|context| context.strong_count() > 0)
    }

    pub(crate) fn invoke(&self, target: &mut T, message: &Message) -> Outcome {
        (self.handler)(target, message)
    }
}

impl<T> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
            context: self.context.clone(),
            priority: self.priority,
            id: self.id,
        }
    }
}

impl<T> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("has_context", &self.has_context())
            .finish()
    }
}
