/// Counters the paint and resize handlers report through, since handler
/// outcomes are not interpreted by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames_presented: u64,
    pub device_losses: u64,
    pub reconstruct_passes: u64,
    pub failed_paints: u64,
    pub last_error: Option<String>,
}

impl FrameStats {
    pub(crate) fn record_failure(&mut self, error: impl ToString) {
        self.failed_paints += 1;
        self.last_error = Some(error.to_string());
    }
}
