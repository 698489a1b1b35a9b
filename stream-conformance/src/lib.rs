//! # Stream Conformance
//!
//! `stream-conformance` packages the contract every
//! [`ByteSource`](stream_source::ByteSource) implementation is held
//! to: parameterized checks covering reads, skips, availability and
//! end-of-data behavior, a random file-backed payload to run them
//! against ([`Fixture`]), and an always-failing source for exercising
//! error paths ([`BrokenSource`]).

mod broken;
mod checks;
mod fixture;

pub use broken::BrokenSource;
pub use checks::{
    check_available_after_close, check_available_after_open,
    check_available_after_read, check_available_at_end,
    check_bytes_skipped, check_bytes_skipped_after_eof,
    check_bytes_skipped_after_read, check_negative_skip_is_noop,
    check_read_multiple_bytes, check_read_one_byte, check_read_past_eof,
    check_skip_from_file_channel, run_all,
};
pub use fixture::{Fixture, DEFAULT_PAYLOAD_LEN};
