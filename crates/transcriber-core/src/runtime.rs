use crate::events::BatchEvent;

/// Sink for submission events; the host supplies an implementation.
pub trait BatchRuntime: Send + Sync {
    fn emit(&self, event: BatchEvent);
}
