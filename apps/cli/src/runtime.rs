use stt_captioner_core::{CaptionEvent, CaptionerRuntime};
use stt_transcriber_core::{BatchEvent, BatchRuntime};
use tokio::sync::mpsc;

pub enum AppEvent {
    Caption(CaptionEvent),
    Batch(BatchEvent),
}

/// Forwards core events into the command's render loop over a channel,
/// preserving arrival order.
pub struct CliRuntime {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl CliRuntime {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl CaptionerRuntime for CliRuntime {
    fn emit(&self, event: CaptionEvent) {
        let _ = self.tx.send(AppEvent::Caption(event));
    }
}

impl BatchRuntime for CliRuntime {
    fn emit(&self, event: BatchEvent) {
        let _ = self.tx.send(AppEvent::Batch(event));
    }
}
