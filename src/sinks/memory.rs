//! In-memory capturing sink
//!
//! Collects every write so applications can inspect log output, e.g. in tests
//! or for a diagnostics endpoint. Can pose as an interactive terminal and can
//! be told to fail its writes.

use crate::core::{LoggerError, Result, Sink};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct MemorySink {
    name: String,
    interactive: bool,
    fail_writes: AtomicBool,
    buffer: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interactive: false,
            fail_writes: AtomicBool::new(false),
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// A capturing sink that reports itself as an interactive terminal.
    pub fn interactive(name: impl Into<String>) -> Self {
        Self {
            interactive: true,
            ..Self::new(name)
        }
    }

    /// Make subsequent writes fail with a broken-pipe error.
    pub fn set_failing(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

#[async_trait]
impl Sink for MemorySink {
    async fn write(&self, bytes: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(LoggerError::write_failure(
                &self.name,
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed"),
            ));
        }
        self.buffer.lock().extend_from_slice(bytes);
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.interactive
    }

    fn name(&self) -> &str {
        &self.name
    }
}
