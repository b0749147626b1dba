pub mod accumulator;
pub mod id;
pub mod types;
pub mod view;

pub use accumulator::{CaptionAccumulator, CaptionUpdate};
pub use id::{IdGenerator, SequentialIdGen, UuidIdGen};
pub use types::{CaptionFrame, RecognitionEvent, TranscriptSegment};
pub use view::CaptionView;
