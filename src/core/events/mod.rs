//! Priority-ordered message bus.
//!
//! `EventRegistry` keeps the handler lists, `dispatcher::dispatch` walks them
//! for an incoming `Message`.

pub mod dispatcher;
pub mod event;
pub mod message;
pub mod outcome;
pub mod priority;
pub mod registry;

pub use dispatcher::{DispatchTarget, dispatch};
pub use event::{Event, EventId, Handler};
pub use message::{Message, MessageArgs, MessageId, MouseButton, ids};
pub use outcome::Outcome;
pub use priority::Priority;
pub use registry::EventRegistry;
