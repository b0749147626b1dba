#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type")]
pub enum BatchEvent {
    #[serde(rename = "batchStarted")]
    BatchStarted { session_id: String },
    #[serde(rename = "batchResponse")]
    BatchResponse {
        session_id: String,
        response: serde_json::Value,
    },
    #[serde(rename = "batchFailed")]
    BatchFailed { session_id: String, error: String },
}
