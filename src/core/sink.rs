//! Sink trait: the byte-accepting capability every destination resolves to

use super::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// A destination that accepts bytes and signals completion.
///
/// # Example
///
/// ```no_run
/// use tagged_logger::core::{Result, Sink};
/// use async_trait::async_trait;
///
/// struct UdpSink;
///
/// #[async_trait]
/// impl Sink for UdpSink {
///     async fn write(&self, bytes: &[u8]) -> Result<()> {
///         // Send the formatted line somewhere
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "udp"
///     }
/// }
/// ```
#[async_trait]
pub trait Sink: Send + Sync {
    /// Write one formatted line. Completes once the bytes are handed off.
    async fn write(&self, bytes: &[u8]) -> Result<()>;

    /// True when the sink is an interactive terminal.
    fn is_terminal(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}

impl fmt::Debug for dyn Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name())
            .field("terminal", &self.is_terminal())
            .finish()
    }
}

pub type SinkRef = Arc<dyn Sink>;

/// Resolved destinations; index 0 is primary, index 1 secondary.
pub type Destinations = Arc<[SinkRef]>;

/// Identity comparison: two handles are the same sink when they point at the
/// same allocation.
#[inline]
pub fn same_sink(a: &SinkRef, b: &SinkRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
