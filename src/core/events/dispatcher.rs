use log::{trace, warn};

use crate::core::events::message::Message;
use crate::core::events::outcome::Outcome;
use crate::core::events::registry::EventRegistry;

/// Anything that owns an `EventRegistry` over itself and can fall back to a
/// default procedure for messages nobody registered for.
pub trait DispatchTarget: Sized {
    fn events(&self) -> &EventRegistry<Self>;

    fn default_message(&mut self, message: &Message) -> Outcome;
}

/// Routes one message to the handlers registered for it.
///
/// Handlers run from the back of the bucket to the front: highest priority
/// first, and among equal priorities the most recently registered first.
/// The bucket is copied before the first handler runs, so handlers are free
/// to register or unregister events on `target` while being dispatched.
/// Individual handler outcomes are not interpreted.
pub fn dispatch<T: DispatchTarget>(target: &mut T, message: &Message) -> Outcome {
    let Some(snapshot) = target.events().snapshot(message.id) else {
        trace!("no handlers for message {:#06x}, using default", message.id);
        return target.default_message(message);
    };

    for event in snapshot.iter().rev() {
        if !event.is_context_alive() {
            warn!(
                "skipping event {} for message {:#06x}: context dropped",
                event.id(),
                message.id
            );
            continue;
        }
        let outcome = event.invoke(target, message);
        trace!("event {} returned {outcome:?}", event.id());
    }

    Outcome::Handled
}
