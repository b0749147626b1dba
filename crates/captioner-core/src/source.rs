use std::io::BufRead;
use std::path::{Path, PathBuf};

use futures_util::stream::{self, BoxStream};
use stt_transcript::RecognitionEvent;

use crate::Error;

/// Configuration handed to the recognition engine.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListenParams {
    pub language: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for ListenParams {
    fn default() -> Self {
        Self {
            language: "ko-KR".to_string(),
            continuous: true,
            interim_results: true,
        }
    }
}

pub type RecognitionStream = BoxStream<'static, Result<RecognitionEvent, Error>>;

/// Seam in front of the platform recognition capability.
///
/// The engine itself is an external collaborator; a source only hands back
/// the event stream it produces. `open` must fail (rather than capture)
/// when the capability is missing, so the caller can surface a visible
/// notice and stay idle.
pub trait RecognitionSource: Send + Sync {
    fn is_available(&self) -> bool;

    fn open(&self, params: &ListenParams) -> crate::Result<RecognitionStream>;
}

/// Replays newline-delimited JSON [`RecognitionEvent`]s from a file, in
/// recorded order. Stands in for a live engine in headless environments;
/// a malformed line surfaces as an unrecoverable stream error, matching
/// how an engine error ends a session.
pub struct ReplaySource {
    path: PathBuf,
}

impl ReplaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecognitionSource for ReplaySource {
    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn open(&self, params: &ListenParams) -> crate::Result<RecognitionStream> {
        if !self.is_available() {
            return Err(Error::Unavailable(format!(
                "no recognition events at {}",
                self.path.display()
            )));
        }

        tracing::debug!(
            path = %self.path.display(),
            language = %params.language,
            "opening replay source"
        );

        let file = std::fs::File::open(&self.path)?;
        let lines: Vec<String> = std::io::BufReader::new(file)
            .lines()
            .collect::<Result<_, _>>()?;

        let events = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str::<RecognitionEvent>(&line).map_err(Error::Event)
            });

        Ok(Box::pin(stream::iter(events)))
    }
}
