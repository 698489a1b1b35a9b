use stream_error::{Result, StreamError};

/// Strategy invoked by [`ProxySource`](crate::ProxySource) whenever a
/// forwarded operation fails.
///
/// Returning `Err` propagates the fault (possibly translated) to the
/// caller. Returning `Ok(())` suppresses it, making the forwarding
/// operation report its terminal fallback instead: end-of-data for
/// reads, 0 for skip. Either way the handler observes every fault, so
/// suppression is never silent.
///
/// Any `FnMut(StreamError) -> Result<()>` closure is a handler.
pub trait FaultHandler {
    fn handle(&mut self, fault: StreamError) -> Result<()>;
}

impl<F> FaultHandler for F
where
    F: FnMut(StreamError) -> Result<()>,
{
    fn handle(&mut self, fault: StreamError) -> Result<()> {
        self(fault)
    }
}

/// Default strategy: every fault propagates unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Propagate;

impl FaultHandler for Propagate {
    fn handle(&mut self, fault: StreamError) -> Result<()> {
        Err(fault)
    }
}

/// Observe-and-swallow strategy: faults are logged at debug level and
/// suppressed, so forwarding operations report their terminal fallback
/// instead of failing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Suppress;

impl FaultHandler for Suppress {
    fn handle(&mut self, fault: StreamError) -> Result<()> {
        log::debug!("Suppressing stream fault: {}", fault);
        Ok(())
    }
}
