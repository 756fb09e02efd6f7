/// Why a render target went away.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LossReason {
    Resize,
    DeviceLost,
}

/// Broadcast to the component tree when render resources change.
///
/// Every `RenderTargetLost` must reach all drawable components before the
/// next draw, so none of them keeps using bitmaps of the old target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    RenderTargetLost { generation: u64, reason: LossReason },
}
