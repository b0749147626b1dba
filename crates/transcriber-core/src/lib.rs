mod batch;
mod error;
mod events;
mod runtime;

pub use batch::{BatchController, BatchOutcome};
pub use error::Error;
pub use events::BatchEvent;
pub use runtime::BatchRuntime;
