use stream_error::Result;
use stream_source::{util, ByteSource};

const CHUNK_LEN: usize = 8 * 1024;

/// Run every contract check, opening a fresh source per check.
///
/// The factory is expected to produce a source positioned at the start
/// of `payload`; each check consumes its own instance. `payload` must
/// hold at least 4 KiB so the skip choreographies have room to move.
///
/// The availability checks assume lazily buffered sources, such as
/// file-backed ones opened over [`Fixture::path`](crate::Fixture::path).
/// For eagerly available sources, call the individual checks instead
/// and assert availability separately.
pub fn run_all<S, F>(payload: &[u8], mut open: F) -> Result<()>
where
    S: ByteSource,
    F: FnMut() -> Result<S>,
{
    assert!(
        payload.len() >= 4 * 1024,
        "the contract checks need at least 4 KiB of payload"
    );

    check_available_after_open(open()?);
    check_available_after_read(open()?);
    check_available_at_end(open()?);
    check_available_after_close(open()?);
    check_read_one_byte(open()?, payload);
    check_read_multiple_bytes(open()?, payload);
    check_read_past_eof(open()?);
    check_bytes_skipped(open()?, payload);
    check_bytes_skipped_after_read(open()?, payload);
    check_bytes_skipped_after_eof(open()?, payload);
    check_negative_skip_is_noop(open()?, payload);
    check_skip_from_file_channel(open()?, payload);
    Ok(())
}

/// A lazily buffered source reports no available bytes until the first
/// read fills its buffer.
pub fn check_available_after_open<S: ByteSource>(source: S) {
    assert_eq!(
        source.available().expect("available failed after open"),
        0,
        "a lazily buffered source must report 0 available bytes at open"
    );
}

pub fn check_available_after_read<S: ByteSource>(mut source: S) {
    let byte = source.read_byte().expect("read failed");
    assert!(byte.is_some(), "the source must not start exhausted");
    let available =
        source.available().expect("available failed after read");
    assert!(
        available > 0,
        "available must be positive right after a read"
    );
}

pub fn check_available_at_end<S: ByteSource>(mut source: S) {
    util::drain(&mut source).expect("drain failed");
    assert_eq!(
        source.available().expect("available failed at end-of-data"),
        0,
        "available must report 0 once the source is exhausted"
    );
}

pub fn check_available_after_close<S: ByteSource>(mut source: S) {
    source.close().expect("close failed");
    assert_eq!(
        source.available().expect("available failed after close"),
        0,
        "available must report 0 once the source is closed"
    );
}

/// Byte-wise reads reproduce the payload exactly, then report
/// end-of-data.
pub fn check_read_one_byte<S: ByteSource>(mut source: S, payload: &[u8]) {
    for (index, expected) in payload.iter().enumerate() {
        match source.read_byte().expect("read failed") {
            Some(found) => assert_eq!(
                found, *expected,
                "byte {} differs from the payload",
                index
            ),
            None => panic!("unexpected end-of-data at byte {}", index),
        }
    }
    assert_eq!(
        source.read_byte().expect("read failed"),
        None,
        "the source must be exhausted after the payload"
    );
}

/// Chunked reads reproduce the payload exactly, then report
/// end-of-data.
pub fn check_read_multiple_bytes<S: ByteSource>(
    mut source: S,
    payload: &[u8],
) {
    let mut chunk = [0u8; CHUNK_LEN];
    let mut offset = 0;
    while offset < payload.len() {
        let read = match source.read(&mut chunk).expect("read failed") {
            Some(read) => read,
            None => panic!("unexpected end-of-data at offset {}", offset),
        };
        assert!(
            read > 0,
            "a non-empty read must produce bytes before end-of-data"
        );
        assert!(
            offset + read <= payload.len(),
            "the source produced more bytes than the payload holds"
        );
        assert!(
            chunk[..read] == payload[offset..offset + read],
            "bytes at offset {} differ from the payload",
            offset
        );
        offset += read;
    }
    assert_eq!(
        source.read(&mut chunk).expect("read failed"),
        None,
        "the source must be exhausted after the payload"
    );
}

/// Once exhausted, a source keeps reporting end-of-data.
pub fn check_read_past_eof<S: ByteSource>(mut source: S) {
    util::drain(&mut source).expect("drain failed");
    let mut chunk = [0u8; 1024];
    for _ in 0..2 {
        assert_eq!(
            source.read(&mut chunk).expect("read failed"),
            None,
            "reads past end-of-data must keep reporting end-of-data"
        );
    }
}

pub fn check_bytes_skipped<S: ByteSource>(mut source: S, payload: &[u8]) {
    assert_eq!(
        source.skip(1024).expect("skip failed"),
        1024,
        "skip must cover the full distance while bytes remain"
    );
    assert_tail_matches(&mut source, payload, 1024);
}

pub fn check_bytes_skipped_after_read<S: ByteSource>(
    mut source: S,
    payload: &[u8],
) {
    read_and_match(&mut source, payload, 0, 1024);
    assert_eq!(
        source.skip(1024).expect("skip failed"),
        1024,
        "skip must cover the full distance while bytes remain"
    );
    assert_tail_matches(&mut source, payload, 2048);
}

pub fn check_bytes_skipped_after_eof<S: ByteSource>(
    mut source: S,
    payload: &[u8],
) {
    assert_eq!(
        source.skip(payload.len() as i64 + 1).expect("skip failed"),
        payload.len() as u64,
        "skipping past the end must clamp to the remaining length"
    );
    assert_eq!(
        source.read_byte().expect("read failed"),
        None,
        "the source must be exhausted after a clamped skip"
    );
}

/// Zero and negative skips leave the read position untouched.
pub fn check_negative_skip_is_noop<S: ByteSource>(
    mut source: S,
    payload: &[u8],
) {
    read_and_match(&mut source, payload, 0, 1024);
    for count in [-1, -1024, i64::MIN] {
        assert_eq!(
            source.skip(count).expect("skip failed"),
            0,
            "skip of {} must be a no-op",
            count
        );
    }
    assert_eq!(source.skip(1024).expect("skip failed"), 1024);
    assert_tail_matches(&mut source, payload, 2048);
}

/// Interleave reads with skips of assorted sizes, hitting both skips
/// served from an internal buffer and skips that must reposition the
/// underlying medium.
pub fn check_skip_from_file_channel<S: ByteSource>(
    mut source: S,
    payload: &[u8],
) {
    // Nothing is buffered yet, so a buffered source must reposition
    // the medium here.
    assert_eq!(source.skip(1024).expect("skip failed"), 1024);
    read_and_match(&mut source, payload, 1024, 1024);
    assert_eq!(source.skip(256).expect("skip failed"), 256);
    assert_eq!(source.skip(256).expect("skip failed"), 256);
    assert_eq!(source.skip(512).expect("skip failed"), 512);
    assert_tail_matches(&mut source, payload, 3072);
}

/// Read `len` bytes and assert they equal `payload[from..from + len]`.
fn read_and_match<S: ByteSource>(
    source: &mut S,
    payload: &[u8],
    from: usize,
    len: usize,
) {
    for index in from..from + len {
        match source.read_byte().expect("read failed") {
            Some(found) => assert_eq!(
                found, payload[index],
                "byte {} differs from the payload",
                index
            ),
            None => panic!("unexpected end-of-data at byte {}", index),
        }
    }
}

/// Drain the source and assert the remainder equals `payload[from..]`.
fn assert_tail_matches<S: ByteSource>(
    source: &mut S,
    payload: &[u8],
    from: usize,
) {
    let rest = util::read_to_vec(source).expect("read failed");
    assert_eq!(
        rest.len(),
        payload.len() - from,
        "remainder length differs from the payload tail at {}",
        from
    );
    assert!(
        rest.as_slice() == &payload[from..],
        "remainder differs from the payload tail at {}",
        from
    );
}
