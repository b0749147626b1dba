use crate::events::CaptionEvent;

/// Sink for session events. The host (CLI loop, UI shell, test harness)
/// supplies an implementation; delivery order matches emission order.
pub trait CaptionerRuntime: Send + Sync {
    fn emit(&self, event: CaptionEvent);
}
