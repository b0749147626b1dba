mod error;
pub mod events;
pub mod runtime;
pub mod session;
pub mod source;

pub use error::Error;
pub use events::CaptionEvent;
pub use runtime::CaptionerRuntime;
pub use session::CaptionSession;
pub use source::{ListenParams, RecognitionSource, RecognitionStream, ReplaySource};

pub type Result<T> = std::result::Result<T, Error>;
