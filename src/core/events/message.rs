use crate::core::data::client_size::ClientSize;

pub type MessageId = u32;

/// Message identifiers understood by the toolkit.
///
/// `0..=SYSTEM_LAST` is reserved for host system messages. Application
/// messages start at `USER`.
pub mod ids {
    use super::MessageId;

    pub const NULL: MessageId = 0x0000;
    pub const CREATE: MessageId = 0x0001;
    pub const DESTROY: MessageId = 0x0002;
    pub const MOVE: MessageId = 0x0003;
    pub const RESIZE: MessageId = 0x0005;
    pub const ACTIVATE: MessageId = 0x0006;
    pub const SET_FOCUS: MessageId = 0x0007;
    pub const KILL_FOCUS: MessageId = 0x0008;
    pub const PAINT: MessageId = 0x000F;
    pub const SYSTEM_LAST: MessageId = 0x000F;

    pub const CLOSE: MessageId = 0x0010;

    pub const MOUSE_MOVE: MessageId = 0x0200;
    pub const MOUSE_DOWN: MessageId = 0x0201;
    pub const MOUSE_UP: MessageId = 0x0202;

    pub const USER: MessageId = 0x0400;
    /// Posted by the frame clock: the frame must be redrawn.
    pub const FRAME_UPDATE: MessageId = USER + 0x07;

    #[must_use]
    pub fn is_system(id: MessageId) -> bool {
        id <= SYSTEM_LAST
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Payload carried alongside a message id.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum MessageArgs {
    #[default]
    None,
    Size(ClientSize),
    Point { x: f64, y: f64 },
    Button(MouseButton),
    Focus(bool),
    User(u64),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub args: MessageArgs,
}

impl Message {
    #[must_use]
    pub const fn new(id: MessageId) -> Self {
        Self {
            id,
            args: MessageArgs::None,
        }
    }

    #[must_use]
    pub const fn with_args(id: MessageId, args: MessageArgs) -> Self {
        Self { id, args }
    }

    #[must_use]
    pub const fn resize(size: ClientSize) -> Self {
        Self::with_args(ids::RESIZE, MessageArgs::Size(size))
    }

    /// The size carried by a `RESIZE` style message, if any.
    #[must_use]
    pub fn size(&self) -> Option<ClientSize> {
        match self.args {
            MessageArgs::Size(size) => Some(size),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_range_covers_system_messages_only() {
        assert!(ids::is_system(ids::NULL));
        assert!(ids::is_system(ids::DESTROY));
        assert!(ids::is_system(ids::PAINT));
        assert!(!ids::is_system(ids::CLOSE));
        assert!(!ids::is_system(ids::FRAME_UPDATE));
    }

    #[test]
    fn frame_update_is_an_application_message() {
        assert_eq!(ids::FRAME_UPDATE, 0x0407);
        assert!(ids::FRAME_UPDATE > ids::USER);
    }

    #[test]
    fn resize_message_exposes_its_size() {
        let message = Message::resize(ClientSize::new(640, 480));

        assert_eq!(message.id, ids::RESIZE);
        assert_eq!(message.size(), Some(ClientSize::new(640, 480)));
        assert_eq!(Message::new(ids::PAINT).size(), None);
    }
}
