mod client;
mod env;
mod error;
mod types;

pub use client::{ClovaClient, ClovaClientBuilder, DEFAULT_API_BASE};
pub use env::Env;
pub use error::Error;
pub use types::Language;
