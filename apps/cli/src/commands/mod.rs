pub mod listen;
pub mod transcribe;
