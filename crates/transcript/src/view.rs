use crate::accumulator::CaptionAccumulator;
use crate::id::IdGenerator;
use crate::types::{CaptionFrame, RecognitionEvent, TranscriptSegment};

/// Stateful driver that accumulates events and exposes a complete
/// [`CaptionFrame`] snapshot on every update.
///
/// Use this when the renderer wants to read the full current state (a
/// terminal loop or a test assertion) rather than handle deltas manually.
/// For fine-grained delta control, use [`CaptionAccumulator`] directly.
pub struct CaptionView {
    acc: CaptionAccumulator,
    segments: Vec<TranscriptSegment>,
}

impl CaptionView {
    pub fn new() -> Self {
        Self {
            acc: CaptionAccumulator::new(),
            segments: Vec::new(),
        }
    }

    pub fn with_id_gen(id_gen: impl IdGenerator + 'static) -> Self {
        Self {
            acc: CaptionAccumulator::with_id_gen(id_gen),
            segments: Vec::new(),
        }
    }

    /// Feed one event. Returns `true` if the visible frame changed.
    pub fn process(&mut self, event: &RecognitionEvent) -> bool {
        let update = self.acc.process(event);
        match update.new_segment {
            Some(segment) => {
                self.segments.push(segment);
                true
            }
            None => update.partial.is_some(),
        }
    }

    /// Returns the complete snapshot needed to render current captions.
    pub fn frame(&self) -> CaptionFrame {
        CaptionFrame {
            partial: self.acc.partial().map(str::to_string),
            segments: self.segments.clone(),
        }
    }
}

impl Default for CaptionView {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CaptionView> for CaptionFrame {
    fn from(view: CaptionView) -> Self {
        view.frame()
    }
}
