//! # Stream Source
//!
//! `stream-source` defines the sequential byte-input contract shared by
//! this workspace ([`ByteSource`]), together with two reference
//! implementations: an eager in-memory source ([`MemorySource`]) and a
//! lazily buffered file source ([`FileSource`]).
//!
//! End-of-data is always reported as `Ok(None)`, keeping the byte
//! range, errors and exhaustion in three separate channels.

mod file;
mod memory;
mod source;
pub mod util;

pub use file::{FileSource, DEFAULT_BUFFER_CAPACITY};
pub use memory::MemorySource;
pub use source::ByteSource;
