/// Result code returned by handlers and by the dispatcher.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Handlers ran, or the default procedure acted on the message.
    Handled,
    /// Nobody acted on the message.
    Ignored,
    /// The handler was skipped because its context is gone or busy.
    Skipped,
    /// The render target reported device loss during the pass.
    DeviceLost,
    /// The handler could not complete its effect.
    Failed,
}

impl Outcome {
    #[must_use]
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}
