use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use stream_error::{Result, StreamError};

use crate::source::ByteSource;

/// Buffer capacity used by [`FileSource::open`].
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Buffered byte source over a file.
///
/// Availability is lazy: it reports the bytes sitting in the internal
/// buffer, so a freshly opened source reports 0 until the first read
/// fills the buffer. Skips that fit in the buffer only advance the
/// cursor; longer skips reposition the file itself, clamped to its
/// length. Operations on a closed source fail with
/// [`StreamError::Closed`], except `available` which reports 0.
#[derive(Debug)]
pub struct FileSource {
    file: Option<File>,
    buf: Vec<u8>,
    /// Read position within the filled part of the buffer.
    pos: usize,
    /// Number of valid bytes in the buffer.
    filled: usize,
}

impl FileSource {
    /// Open `path` with [`DEFAULT_BUFFER_CAPACITY`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_capacity(path, DEFAULT_BUFFER_CAPACITY)
    }

    /// Open `path` with an explicit buffer capacity.
    pub fn with_capacity<P: AsRef<Path>>(
        path: P,
        capacity: usize,
    ) -> Result<Self> {
        log::debug!(
            "Opening {} with a {}-byte buffer",
            path.as_ref().display(),
            capacity
        );
        let file = File::open(path)?;
        Ok(Self {
            file: Some(file),
            // A zero capacity could never make progress.
            buf: vec![0; capacity.max(1)],
            pos: 0,
            filled: 0,
        })
    }

    fn buffered(&self) -> usize {
        self.filled - self.pos
    }

    /// Refill the buffer from the file. Returns false once the file
    /// has no more bytes.
    fn refill(&mut self) -> Result<bool> {
        self.pos = 0;
        self.filled = 0;
        let read = match self.file.as_mut() {
            Some(file) => file.read(&mut self.buf)?,
            None => return Err(StreamError::Closed),
        };
        self.filled = read;
        Ok(read > 0)
    }
}

impl ByteSource for FileSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        if buf.is_empty() {
            return Ok(Some(0));
        }
        if self.buffered() == 0 && !self.refill()? {
            return Ok(None);
        }
        let read = buf.len().min(self.buffered());
        buf[..read]
            .copy_from_slice(&self.buf[self.pos..self.pos + read]);
        self.pos += read;
        Ok(Some(read))
    }

    fn skip(&mut self, count: i64) -> Result<u64> {
        if count <= 0 {
            return Ok(0);
        }
        let count = count as u64;
        let buffered = self.buffered() as u64;
        if count <= buffered {
            self.pos += count as usize;
            return Ok(count);
        }

        // The buffer cannot cover the distance: drop it and reposition
        // the file itself, clamped to its length.
        let beyond = count - buffered;
        self.pos = 0;
        self.filled = 0;
        let file = match self.file.as_mut() {
            Some(file) => file,
            None => return Err(StreamError::Closed),
        };
        let position = file.stream_position()?;
        let length = file.metadata()?.len();
        let target = position.saturating_add(beyond).min(length);
        file.seek(SeekFrom::Start(target))?;
        log::trace!(
            "Skipped {} buffered and {} repositioned bytes",
            buffered,
            target - position
        );
        Ok(buffered + (target - position))
    }

    fn available(&self) -> Result<usize> {
        if self.file.is_none() {
            return Ok(0);
        }
        Ok(self.buffered())
    }

    fn close(&mut self) -> Result<()> {
        if self.file.take().is_some() {
            self.pos = 0;
            self.filled = 0;
            log::trace!("File source closed");
        }
        Ok(())
    }
}
