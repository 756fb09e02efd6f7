use crate::core::data::client_size::ClientSize;

/// What a component can learn about the window it lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowContext {
    pub title: String,
    pub client_size: ClientSize,
}

impl WindowContext {
    #[must_use]
    pub fn new(title: impl Into<String>, client_size: ClientSize) -> Self {
        Self {
            title: title.into(),
            client_size,
        }
    }
}
