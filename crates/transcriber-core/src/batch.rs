use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use stt_clova::{ClovaClient, Language};

use crate::error::Error;
use crate::events::BatchEvent;
use crate::runtime::BatchRuntime;

/// What a settled submission left behind. At most one outcome is
/// retained; the next submission supersedes it.
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    Success(serde_json::Value),
    Failure(String),
}

/// Drives one file-transcription submission at a time.
///
/// The busy flag is the headless equivalent of a disabled submit control:
/// while a request is outstanding, [`submit`] is a no-op and no second
/// network call is issued. Every failure is terminal for its submission;
/// a fresh user-triggered attempt is required.
///
/// [`submit`]: BatchController::submit
pub struct BatchController {
    busy: AtomicBool,
    last: Mutex<Option<BatchOutcome>>,
}

impl BatchController {
    pub fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
            last: Mutex::new(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn last_outcome(&self) -> Option<BatchOutcome> {
        self.last.lock().unwrap().clone()
    }

    /// Submit one audio payload for transcription.
    ///
    /// Returns `false` without any side effect when a submission is
    /// already pending. `audio: None` models "no file selected": the
    /// failure is surfaced without issuing a network call.
    pub async fn submit(
        &self,
        client: &ClovaClient,
        runtime: &dyn BatchRuntime,
        session_id: &str,
        audio: Option<Bytes>,
        language: Language,
    ) -> bool {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(session_id, "submit ignored: submission already pending");
            return false;
        }

        // A new submission supersedes whatever the previous one left.
        *self.last.lock().unwrap() = None;

        let outcome = match audio {
            None => {
                let error = Error::NoFileSelected.to_string();
                tracing::warn!(session_id, "submission rejected: {error}");
                runtime.emit(BatchEvent::BatchFailed {
                    session_id: session_id.to_string(),
                    error: error.clone(),
                });
                BatchOutcome::Failure(error)
            }
            Some(audio) => {
                runtime.emit(BatchEvent::BatchStarted {
                    session_id: session_id.to_string(),
                });

                match client.recognize(audio, language).await {
                    Ok(response) => {
                        tracing::info!(session_id, "batch transcription completed");
                        runtime.emit(BatchEvent::BatchResponse {
                            session_id: session_id.to_string(),
                            response: response.clone(),
                        });
                        BatchOutcome::Success(response)
                    }
                    Err(e) => {
                        tracing::warn!(session_id, error = %e, "batch transcription failed");
                        runtime.emit(BatchEvent::BatchFailed {
                            session_id: session_id.to_string(),
                            error: e.to_string(),
                        });
                        BatchOutcome::Failure(e.to_string())
                    }
                }
            }
        };

        *self.last.lock().unwrap() = Some(outcome);
        self.busy.store(false, Ordering::Release);
        true
    }
}

impl Default for BatchController {
    fn default() -> Self {
        Self::new()
    }
}
