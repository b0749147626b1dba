use stt_transcript::TranscriptSegment;

#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type")]
pub enum CaptionEvent {
    #[serde(rename = "captionStarted")]
    Started { session_id: String },
    #[serde(rename = "captionPartial")]
    Partial { session_id: String, text: String },
    #[serde(rename = "captionFinal")]
    Final {
        session_id: String,
        segment: TranscriptSegment,
    },
    #[serde(rename = "captionFailed")]
    Failed { session_id: String, error: String },
    #[serde(rename = "captionStopped")]
    Stopped { session_id: String },
}
