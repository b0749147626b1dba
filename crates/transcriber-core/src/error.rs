#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no audio file selected")]
    NoFileSelected,
}
