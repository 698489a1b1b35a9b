//! # Stream Proxy
//!
//! `stream-proxy` provides [`ProxySource`], a forwarding decorator
//! over any [`ByteSource`](stream_source::ByteSource). On top of plain
//! forwarding it adds a rebindable source slot, a terminal closed
//! flag, and a single seam ([`FaultHandler`]) through which every
//! forwarding failure is routed before it reaches the caller.
//!
//! Decorators that tweak one aspect of a stream are expected to wrap a
//! `ProxySource` (or implement the same shape) and override just the
//! operations they care about.

mod fault;
mod proxy;

pub use fault::{FaultHandler, Propagate, Suppress};
pub use proxy::ProxySource;
