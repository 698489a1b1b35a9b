use std::fs;

use rstest::rstest;
use tempdir::TempDir;

use stream_conformance::{self as conformance, Fixture};
use stream_source::{util, ByteSource, FileSource, MemorySource};

fn patterned_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 233) as u8).collect()
}

#[test]
fn test_file_source_passes_the_contract_with_a_small_buffer() {
    let fixture = Fixture::new().expect("Failed to build the fixture");

    conformance::run_all(fixture.payload(), || {
        FileSource::with_capacity(fixture.path(), 512)
    })
    .expect("Failed to open the payload");
}

#[test]
fn test_file_source_passes_the_contract_with_the_default_buffer() {
    let fixture = Fixture::new().expect("Failed to build the fixture");

    conformance::run_all(fixture.payload(), || {
        FileSource::open(fixture.path())
    })
    .expect("Failed to open the payload");
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
#[case(8)]
#[case(16)]
#[case(32)]
#[case(64)]
#[case(128)]
fn test_bulk_reads_reproduce_the_payload(#[case] chunk_len: usize) {
    let payload = patterned_payload(4099);
    let mut source = MemorySource::new(payload.clone());
    let mut chunk = vec![0u8; chunk_len];
    let mut collected = Vec::new();

    while let Some(read) =
        source.read(&mut chunk).expect("Failed to read a chunk")
    {
        collected.extend_from_slice(&chunk[..read]);
    }

    assert_eq!(collected, payload);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(16)]
#[case(64)]
#[case(1024)]
fn test_file_source_reads_identically_at_any_capacity(
    #[case] capacity: usize,
) {
    let temp_dir =
        TempDir::new("tmp").expect("Failed to create temporary directory");
    let payload = patterned_payload(4099);
    let path = temp_dir.path().join("payload.bin");
    fs::write(&path, &payload).expect("Failed to write the payload");

    let mut source = FileSource::with_capacity(&path, capacity)
        .expect("Failed to open the payload");
    let read = util::read_to_vec(&mut source)
        .expect("Failed to read the payload");

    assert_eq!(read, payload);
}

#[test]
fn test_file_and_memory_sources_agree_on_skips() {
    let temp_dir =
        TempDir::new("tmp").expect("Failed to create temporary directory");
    let payload = patterned_payload(10_000);
    let path = temp_dir.path().join("payload.bin");
    fs::write(&path, &payload).expect("Failed to write the payload");

    let mut in_file = FileSource::with_capacity(&path, 128)
        .expect("Failed to open the payload");
    let mut in_memory = MemorySource::new(payload);

    for count in [100, 7, 3000, -5, 512, 100_000] {
        assert_eq!(
            in_file.skip(count).expect("Failed to skip in the file"),
            in_memory.skip(count).expect("Failed to skip in memory"),
            "skip of {} diverged between the sources",
            count
        );
        assert_eq!(
            in_file.read_byte().expect("Failed to read from the file"),
            in_memory.read_byte().expect("Failed to read from memory"),
            "the byte after a skip of {} diverged",
            count
        );
    }
}
