use stream_error::Result;

/// Sequential byte-input contract shared by every source in this
/// workspace.
///
/// End-of-data is a separate channel from both bytes and errors: an
/// exhausted source reports `Ok(None)`, never an error and never a
/// sentinel value mixed into the byte range.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes into the front of `buf`, returning
    /// how many bytes were produced.
    ///
    /// Returns `Ok(None)` once the source is exhausted. An empty `buf`
    /// reads nothing and returns `Ok(Some(0))` even at end-of-data; a
    /// non-empty `buf` never yields `Ok(Some(0))`.
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>>;

    /// Read the next byte, or `Ok(None)` once the source is exhausted.
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.read(&mut byte)? {
            Some(read) if read > 0 => Ok(Some(byte[0])),
            _ => Ok(None),
        }
    }

    /// Advance the read position by up to `count` bytes without
    /// handing them to the caller, returning how many bytes were
    /// actually skipped.
    ///
    /// A zero or negative `count` skips nothing and returns 0. Skipping
    /// past the end clamps to the bytes that remain.
    fn skip(&mut self, count: i64) -> Result<u64>;

    /// Estimate of how many bytes the next read can produce without
    /// blocking on the underlying medium. Reports 0 once the source is
    /// closed.
    fn available(&self) -> Result<usize>;

    /// Release the underlying medium. Closing an already-closed source
    /// is a no-op.
    fn close(&mut self) -> Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        (**self).read(buf)
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }

    fn skip(&mut self, count: i64) -> Result<u64> {
        (**self).skip(count)
    }

    fn available(&self) -> Result<usize> {
        (**self).available()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
