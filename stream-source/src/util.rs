use stream_error::Result;

use crate::source::ByteSource;

const CHUNK_LEN: usize = 8 * 1024;

/// Read and discard bytes until end-of-data, returning how many bytes
/// were consumed.
pub fn drain<S: ByteSource + ?Sized>(source: &mut S) -> Result<u64> {
    let mut chunk = [0u8; CHUNK_LEN];
    let mut total = 0u64;
    while let Some(read) = source.read(&mut chunk)? {
        total += read as u64;
    }
    Ok(total)
}

/// Read everything that remains into a vector.
pub fn read_to_vec<S: ByteSource + ?Sized>(
    source: &mut S,
) -> Result<Vec<u8>> {
    let mut collected = Vec::new();
    let mut chunk = [0u8; CHUNK_LEN];
    while let Some(read) = source.read(&mut chunk)? {
        collected.extend_from_slice(&chunk[..read]);
    }
    Ok(collected)
}
