use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreamError>;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stream is closed")]
    Closed,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
