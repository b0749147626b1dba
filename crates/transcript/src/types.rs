/// One event from the recognition engine: a transcript hypothesis and
/// whether the engine will revise it further.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecognitionEvent {
    pub transcript: String,
    pub is_final: bool,
}

impl RecognitionEvent {
    pub fn partial(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }

    pub fn finalized(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }
}

/// A finalized piece of recognized speech. Appended in arrival order and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptSegment {
    pub id: String,
    pub text: String,
}

/// Complete snapshot of caption state at a point in time.
///
/// This is the rendering contract: everything a display layer needs to
/// draw one frame. `partial` is the latest interim hypothesis, if any;
/// `segments` is the append-only sequence of finalized text.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CaptionFrame {
    pub partial: Option<String>,
    pub segments: Vec<TranscriptSegment>,
}
