use std::fs;
use std::path::{Path, PathBuf};

use rand::prelude::*;
use tempdir::TempDir;

use stream_error::Result;

/// Payload length used by [`Fixture::new`].
pub const DEFAULT_PAYLOAD_LEN: usize = 2 * 1024 * 1024;

/// Random payload persisted to a temporary file, so the same bytes can
/// be consumed both from memory and from a backing file.
///
/// The temporary directory lives exactly as long as the fixture.
pub struct Fixture {
    payload: Vec<u8>,
    path: PathBuf,
    _temp_dir: TempDir,
}

impl Fixture {
    /// Generate a [`DEFAULT_PAYLOAD_LEN`] random payload.
    pub fn new() -> Result<Self> {
        Self::with_len(DEFAULT_PAYLOAD_LEN)
    }

    /// Generate a random payload of the given length.
    pub fn with_len(len: usize) -> Result<Self> {
        let mut rng = rand::thread_rng();
        let payload: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let temp_dir = TempDir::new("stream-conformance")?;
        let path = temp_dir.path().join("payload.bin");
        fs::write(&path, &payload)?;
        log::debug!(
            "Wrote a {}-byte payload to {}",
            len,
            path.display()
        );

        Ok(Self {
            payload,
            path,
            _temp_dir: temp_dir,
        })
    }

    /// The generated bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Path of the file holding the same bytes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::fixture::Fixture;

    #[test]
    fn test_fixture_persists_the_payload() {
        let fixture =
            Fixture::with_len(4096).expect("Failed to build the fixture");

        assert_eq!(fixture.payload().len(), 4096);
        let on_disk = fs::read(fixture.path())
            .expect("Failed to read the payload back");
        assert_eq!(on_disk, fixture.payload());
    }
}
