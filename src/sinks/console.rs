//! Console sinks for the process's standard streams

use crate::core::{LoggerError, Result, Sink, SinkRef};
use async_trait::async_trait;
use std::io::{IsTerminal, Write};
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes each line to stdout or stderr with a single locked write.
pub struct ConsoleSink {
    stream: ConsoleStream,
    interactive: bool,
}

static STDOUT: OnceLock<SinkRef> = OnceLock::new();
static STDERR: OnceLock<SinkRef> = OnceLock::new();

impl ConsoleSink {
    /// Shared handle to the process's standard output.
    ///
    /// Every call returns the same handle, so `"stdout"` listed twice is one sink.
    pub fn stdout() -> SinkRef {
        STDOUT
            .get_or_init(|| Arc::new(Self::new(ConsoleStream::Stdout)))
            .clone()
    }

    /// Shared handle to the process's standard error.
    pub fn stderr() -> SinkRef {
        STDERR
            .get_or_init(|| Arc::new(Self::new(ConsoleStream::Stderr)))
            .clone()
    }

    fn new(stream: ConsoleStream) -> Self {
        let interactive = match stream {
            ConsoleStream::Stdout => std::io::stdout().is_terminal(),
            ConsoleStream::Stderr => std::io::stderr().is_terminal(),
        };
        Self {
            stream,
            interactive,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

#[async_trait]
impl Sink for ConsoleSink {
    async fn write(&self, bytes: &[u8]) -> Result<()> {
        let result = match self.stream {
            ConsoleStream::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(bytes).and_then(|_| out.flush())
            }
            ConsoleStream::Stderr => {
                let mut err = std::io::stderr().lock();
                err.write_all(bytes).and_then(|_| err.flush())
            }
        };
        result.map_err(|e| LoggerError::write_failure(self.name(), e))
    }

    fn is_terminal(&self) -> bool {
        self.interactive
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}
