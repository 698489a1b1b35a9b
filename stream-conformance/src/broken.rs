use std::io;

use stream_error::{Result, StreamError};
use stream_source::ByteSource;

/// Source whose every operation fails with a configured IO error, for
/// exercising failure paths.
#[derive(Debug, Clone)]
pub struct BrokenSource {
    kind: io::ErrorKind,
    message: String,
}

impl BrokenSource {
    /// Fail every operation with [`io::ErrorKind::Other`] and the
    /// given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(io::ErrorKind::Other, message)
    }

    /// Fail every operation with the given kind and message.
    pub fn with_kind(
        kind: io::ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn raise<T>(&self) -> Result<T> {
        Err(StreamError::Io(io::Error::new(
            self.kind,
            self.message.clone(),
        )))
    }
}

impl ByteSource for BrokenSource {
    fn read(&mut self, _buf: &mut [u8]) -> Result<Option<usize>> {
        self.raise()
    }

    fn skip(&mut self, _count: i64) -> Result<u64> {
        self.raise()
    }

    fn available(&self) -> Result<usize> {
        self.raise()
    }

    fn close(&mut self) -> Result<()> {
        self.raise()
    }
}
