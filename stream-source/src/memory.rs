use stream_error::Result;

use crate::source::ByteSource;

/// Byte source over an owned in-memory buffer.
///
/// Availability is eager: a freshly created source already reports
/// every remaining byte, unlike the lazily buffered
/// [`FileSource`](crate::FileSource). Closing releases the buffer, so
/// later reads report end-of-data instead of failing.
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: Vec<u8>,
    position: usize,
    closed: bool,
}

impl MemorySource {
    /// Create a source over the given bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            position: 0,
            closed: false,
        }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }
}

impl ByteSource for MemorySource {
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        if buf.is_empty() {
            return Ok(Some(0));
        }
        if self.closed || self.remaining() == 0 {
            return Ok(None);
        }
        let read = buf.len().min(self.remaining());
        buf[..read].copy_from_slice(
            &self.data[self.position..self.position + read],
        );
        self.position += read;
        Ok(Some(read))
    }

    fn skip(&mut self, count: i64) -> Result<u64> {
        if count <= 0 || self.closed {
            return Ok(0);
        }
        let skipped = (count as u64).min(self.remaining() as u64);
        self.position += skipped as usize;
        Ok(skipped)
    }

    fn available(&self) -> Result<usize> {
        if self.closed {
            return Ok(0);
        }
        Ok(self.remaining())
    }

    fn close(&mut self) -> Result<()> {
        self.data = Vec::new();
        self.position = 0;
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{memory::MemorySource, source::ByteSource, util};

    #[test]
    fn test_memory_source_reads_bytes_in_order() {
        let mut source = MemorySource::new(b"abc".to_vec());

        assert_eq!(source.read_byte().unwrap(), Some(b'a'));
        assert_eq!(source.read_byte().unwrap(), Some(b'b'));
        assert_eq!(source.read_byte().unwrap(), Some(b'c'));
        assert_eq!(source.read_byte().unwrap(), None);
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_memory_source_bulk_read_clamps_to_remaining() {
        let mut source = MemorySource::new(b"abc".to_vec());
        let mut buf = [0u8; 2];

        assert_eq!(source.read(&mut buf).unwrap(), Some(2));
        assert_eq!(&buf, b"ab");
        assert_eq!(source.read(&mut buf).unwrap(), Some(1));
        assert_eq!(buf[0], b'c');
        assert_eq!(source.read(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_memory_source_empty_buffer_reads_nothing() {
        let mut source = MemorySource::new(b"abc".to_vec());

        assert_eq!(source.read(&mut []).unwrap(), Some(0));
        util::drain(&mut source).expect("Failed to drain the source");
        // The zero-length rule wins even at end-of-data.
        assert_eq!(source.read(&mut []).unwrap(), Some(0));
    }

    #[test]
    fn test_memory_source_skip_and_resume() {
        let mut source = MemorySource::new(b"abcdef".to_vec());

        assert_eq!(source.skip(2).unwrap(), 2);
        assert_eq!(source.read_byte().unwrap(), Some(b'c'));
        assert_eq!(source.skip(100).unwrap(), 3);
        assert_eq!(source.read_byte().unwrap(), None);
        assert_eq!(source.skip(1).unwrap(), 0);
    }

    #[test]
    fn test_memory_source_negative_skip_is_a_noop() {
        let mut source = MemorySource::new(b"abc".to_vec());

        for count in [0, -1, -1024, i64::MIN] {
            assert_eq!(source.skip(count).unwrap(), 0);
        }
        assert_eq!(source.read_byte().unwrap(), Some(b'a'));
    }

    #[test]
    fn test_memory_source_availability_is_eager() {
        let mut source = MemorySource::new(b"abc".to_vec());

        assert_eq!(source.available().unwrap(), 3);
        assert_eq!(source.read_byte().unwrap(), Some(b'a'));
        assert_eq!(source.available().unwrap(), 2);
        util::drain(&mut source).expect("Failed to drain the source");
        assert_eq!(source.available().unwrap(), 0);
    }

    #[test]
    fn test_memory_source_close_is_terminal_and_idempotent() {
        let mut source = MemorySource::new(b"abc".to_vec());

        source.close().expect("Failed to close the source");
        assert_eq!(source.read_byte().unwrap(), None);
        assert_eq!(source.skip(1).unwrap(), 0);
        assert_eq!(source.available().unwrap(), 0);
        source.close().expect("Failed to close the source twice");
    }

    #[quickcheck]
    fn prop_skip_clamps_to_remaining(data: Vec<u8>, count: i64) -> bool {
        let mut source = MemorySource::new(data.clone());
        let expected = if count <= 0 {
            0
        } else {
            (count as u64).min(data.len() as u64)
        };

        source.skip(count).expect("Failed to skip") == expected
    }

    #[quickcheck]
    fn prop_skip_then_read_resumes_at_the_right_byte(
        data: Vec<u8>,
        count: i64,
    ) -> bool {
        let mut source = MemorySource::new(data.clone());
        let skipped = source.skip(count).expect("Failed to skip") as usize;
        let rest = util::read_to_vec(&mut source)
            .expect("Failed to read the remainder");

        rest.as_slice() == &data[skipped..]
    }

    #[quickcheck]
    fn prop_byte_reads_equal_bulk_reads(data: Vec<u8>) -> bool {
        let mut source = MemorySource::new(data.clone());
        let mut collected = Vec::new();
        while let Some(byte) =
            source.read_byte().expect("Failed to read a byte")
        {
            collected.push(byte);
        }

        collected == data
    }
}
