use std::sync::{Arc, Mutex};

use futures_util::StreamExt;
use stt_transcript::CaptionAccumulator;
use tokio_util::sync::CancellationToken;

use crate::events::CaptionEvent;
use crate::runtime::CaptionerRuntime;
use crate::source::{ListenParams, RecognitionSource, RecognitionStream};

enum SessionState {
    Idle,
    Listening {
        cancel: CancellationToken,
        task: tokio::task::JoinHandle<()>,
    },
}

/// A single capture session: `Idle -> Listening` on [`start`], back to
/// `Idle` on [`stop`] or an unrecoverable recognition error.
///
/// Each recognition event is a self-transition whose side effect is an
/// emitted [`CaptionEvent`]. Events are dispatched FIFO in arrival order.
///
/// [`start`]: CaptionSession::start
/// [`stop`]: CaptionSession::stop
pub struct CaptionSession {
    state: Mutex<SessionState>,
}

impl CaptionSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::Idle),
        }
    }

    pub fn is_listening(&self) -> bool {
        match &*self.state.lock().unwrap() {
            SessionState::Idle => false,
            SessionState::Listening { task, .. } => !task.is_finished(),
        }
    }

    /// Begin continuous, interim-enabled capture.
    ///
    /// If the capability is unavailable or fails to open, a `Failed` event
    /// is emitted, no capture happens, and this returns `false`. Starting
    /// while already listening is refused.
    pub fn start(
        &self,
        source: &dyn RecognitionSource,
        params: &ListenParams,
        runtime: Arc<dyn CaptionerRuntime>,
    ) -> bool {
        let mut state = self.state.lock().unwrap();

        if let SessionState::Listening { task, .. } = &*state {
            if !task.is_finished() {
                tracing::warn!("start ignored: session already listening");
                return false;
            }
        }

        let session_id = uuid::Uuid::new_v4().to_string();

        let stream = if source.is_available() {
            source.open(params)
        } else {
            Err(crate::Error::Unavailable(
                "recognition engine missing on this platform".to_string(),
            ))
        };

        let stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(session_id = %session_id, error = %e, "capture not started");
                runtime.emit(CaptionEvent::Failed {
                    session_id,
                    error: e.to_string(),
                });
                return false;
            }
        };

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_session(
            stream,
            runtime,
            session_id.clone(),
            cancel.child_token(),
        ));

        tracing::info!(session_id = %session_id, language = %params.language, "capture started");
        *state = SessionState::Listening { cancel, task };
        true
    }

    /// End capture. Calling while idle, or repeatedly, is a no-op.
    pub async fn stop(&self) {
        let previous = {
            let mut state = self.state.lock().unwrap();
            std::mem::replace(&mut *state, SessionState::Idle)
        };

        match previous {
            SessionState::Idle => {
                tracing::debug!("stop ignored: session idle");
            }
            SessionState::Listening { cancel, task } => {
                cancel.cancel();
                let _ = task.await;
            }
        }
    }
}

impl Default for CaptionSession {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_session(
    mut stream: RecognitionStream,
    runtime: Arc<dyn CaptionerRuntime>,
    session_id: String,
    cancel: CancellationToken,
) {
    runtime.emit(CaptionEvent::Started {
        session_id: session_id.clone(),
    });

    let mut acc = CaptionAccumulator::new();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(session_id = %session_id, "session cancelled");
                break;
            }
            item = stream.next() => match item {
                Some(Ok(event)) => {
                    let update = acc.process(&event);
                    match update.new_segment {
                        Some(segment) => runtime.emit(CaptionEvent::Final {
                            session_id: session_id.clone(),
                            segment,
                        }),
                        None => runtime.emit(CaptionEvent::Partial {
                            session_id: session_id.clone(),
                            text: update.partial.unwrap_or_default(),
                        }),
                    }
                }
                Some(Err(e)) => {
                    // No retry or reconnection: surface and stop delivering.
                    tracing::warn!(session_id = %session_id, error = %e, "recognition error");
                    runtime.emit(CaptionEvent::Failed {
                        session_id: session_id.clone(),
                        error: e.to_string(),
                    });
                    break;
                }
                None => {
                    tracing::debug!(session_id = %session_id, "recognition stream ended");
                    break;
                }
            }
        }
    }

    runtime.emit(CaptionEvent::Stopped { session_id });
}
