//! Interim/final caption accumulation.
//!
//! The engine emits a sequence of hypotheses per utterance: any number of
//! interim updates followed by one final. Only the latest interim is ever
//! shown, so interim events replace each other in place. A final event
//! promotes the utterance to a [`TranscriptSegment`] and clears the interim
//! text in the same update; the two are never observable out of sync.

use crate::id::{IdGenerator, UuidIdGen};
use crate::types::{RecognitionEvent, TranscriptSegment};

/// Delta produced by one [`CaptionAccumulator::process`] call.
///
/// `partial` is the interim text to display after this event (`None` means
/// the interim area is cleared). `new_segment` is set exactly when the event
/// finalized an utterance.
#[derive(Debug, Clone)]
pub struct CaptionUpdate {
    pub new_segment: Option<TranscriptSegment>,
    pub partial: Option<String>,
}

/// Accumulates streaming recognition events into caption state.
///
/// Events are processed strictly in arrival order; no reordering and no
/// revision of already-finalized segments.
pub struct CaptionAccumulator {
    partial: Option<String>,
    id_gen: Box<dyn IdGenerator>,
}

impl CaptionAccumulator {
    pub fn new() -> Self {
        Self::with_id_gen(UuidIdGen)
    }

    pub fn with_id_gen(id_gen: impl IdGenerator + 'static) -> Self {
        Self {
            partial: None,
            id_gen: Box::new(id_gen),
        }
    }

    /// Feed one recognition event.
    pub fn process(&mut self, event: &RecognitionEvent) -> CaptionUpdate {
        if event.is_final {
            self.partial = None;
            let segment = TranscriptSegment {
                id: self.id_gen.next_id(),
                text: event.transcript.clone(),
            };
            CaptionUpdate {
                new_segment: Some(segment),
                partial: None,
            }
        } else {
            self.partial = Some(event.transcript.clone());
            CaptionUpdate {
                new_segment: None,
                partial: self.partial.clone(),
            }
        }
    }

    /// The interim text currently held, if any.
    pub fn partial(&self) -> Option<&str> {
        self.partial.as_deref()
    }
}

impl Default for CaptionAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
