use stream_error::{Result, StreamError};
use stream_source::ByteSource;

use crate::fault::{FaultHandler, Propagate};

/// Forwarding decorator over a [`ByteSource`].
///
/// A `ProxySource` presents the same contract as the source it wraps,
/// forwarding every operation while adding three things on top:
///
/// - a rebindable slot: the wrapped source can be swapped out via
///   [`rebind`](Self::rebind) or absent entirely, in which case reads
///   report end-of-data, skip and available report 0, and nothing
///   fails;
/// - a terminal closed flag: after a successful [`close`](Self::close)
///   reads report end-of-data and available reports 0 without touching
///   the source again, while skip keeps being forwarded;
/// - a single fault seam: every failure of a forwarded read, skip or
///   close is routed through the [`FaultHandler`] before the operation
///   returns. `available` is the one exception and propagates its
///   faults directly.
///
/// A close failure that the handler propagates leaves the proxy open,
/// so closing can be retried. Suppressed faults turn into the
/// operation's terminal fallback: end-of-data for reads, 0 for skip.
#[derive(Debug)]
pub struct ProxySource<S, F = Propagate> {
    source: Option<S>,
    fault: F,
    closed: bool,
}

impl<S: ByteSource> ProxySource<S> {
    /// Wrap `source` with the default propagating fault handler.
    pub fn new(source: S) -> Self {
        Self::with_fault_handler(source, Propagate)
    }

    /// Create a proxy with no source bound. Reads report end-of-data
    /// until one is bound via [`rebind`](Self::rebind).
    pub fn unbound() -> Self {
        Self {
            source: None,
            fault: Propagate,
            closed: false,
        }
    }
}

impl<S: ByteSource, F: FaultHandler> ProxySource<S, F> {
    /// Wrap `source` with an explicit fault-handling strategy.
    pub fn with_fault_handler(source: S, fault: F) -> Self {
        Self {
            source: Some(source),
            fault,
            closed: false,
        }
    }

    /// Whether a close has completed on this proxy.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The currently bound source, if any. No side effects.
    pub fn underlying(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Mutable access to the currently bound source, if any.
    pub fn underlying_mut(&mut self) -> Option<&mut S> {
        self.source.as_mut()
    }

    /// The fault-handling strategy.
    pub fn fault_handler(&self) -> &F {
        &self.fault
    }

    /// Replace the bound source, returning the previous one. The next
    /// operation reflects the new binding immediately; the closed flag
    /// is left untouched.
    pub fn rebind(&mut self, source: Option<S>) -> Option<S> {
        std::mem::replace(&mut self.source, source)
    }

    /// Consume the proxy, returning the bound source, if any.
    pub fn into_inner(self) -> Option<S> {
        self.source
    }

    /// Route `fault` through the strategy. `Err` propagates to the
    /// caller, `Ok` tells the forwarding operation to report its
    /// terminal fallback.
    fn intercept(&mut self, fault: StreamError) -> Result<()> {
        self.fault.handle(fault)
    }
}

impl<S: ByteSource, F: FaultHandler> ByteSource for ProxySource<S, F> {
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        if self.closed {
            return Ok(None);
        }
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(None),
        };
        match source.read(buf) {
            Ok(read) => Ok(read),
            Err(fault) => {
                self.intercept(fault)?;
                Ok(None)
            }
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        if self.closed {
            return Ok(None);
        }
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(None),
        };
        match source.read_byte() {
            Ok(byte) => Ok(byte),
            Err(fault) => {
                self.intercept(fault)?;
                Ok(None)
            }
        }
    }

    fn skip(&mut self, count: i64) -> Result<u64> {
        if count <= 0 {
            return Ok(0);
        }
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(0),
        };
        match source.skip(count) {
            Ok(skipped) => Ok(skipped),
            Err(fault) => {
                self.intercept(fault)?;
                Ok(0)
            }
        }
    }

    fn available(&self) -> Result<usize> {
        if self.closed {
            return Ok(0);
        }
        match &self.source {
            Some(source) => source.available(),
            None => Ok(0),
        }
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        if let Some(source) = self.source.as_mut() {
            if let Err(fault) = source.close() {
                // A propagated close failure leaves the proxy open, so
                // the caller can retry.
                self.intercept(fault)?;
            }
        }
        self.closed = true;
        Ok(())
    }
}
