//! Destination resolution: configured names, paths and handles to sinks

use super::error::{LoggerError, Result};
use super::sink::SinkRef;
use crate::sinks::{ConsoleSink, FileSink};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A configured destination before resolution.
#[derive(Clone)]
pub enum Destination {
    /// `"stdout"`, `"stderr"` or a file path
    Named(String),
    /// A sink supplied by the caller, passed through unchanged
    Sink(SinkRef),
}

impl Destination {
    pub fn stdout() -> Self {
        Destination::Named("stdout".to_string())
    }

    pub fn stderr() -> Self {
        Destination::Named("stderr".to_string())
    }

    pub fn sink(sink: SinkRef) -> Self {
        Destination::Sink(sink)
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Destination::Sink(sink) => f.debug_tuple("Sink").field(&sink.name()).finish(),
        }
    }
}

impl From<&str> for Destination {
    fn from(name: &str) -> Self {
        Destination::Named(name.to_string())
    }
}

impl From<String> for Destination {
    fn from(name: String) -> Self {
        Destination::Named(name)
    }
}

impl From<SinkRef> for Destination {
    fn from(sink: SinkRef) -> Self {
        Destination::Sink(sink)
    }
}

/// Destinations used when none are configured: stdout primary, stderr secondary.
pub fn default_destinations() -> Vec<Destination> {
    vec![Destination::stdout(), Destination::stderr()]
}

/// Resolve configured destinations, in order, to sink handles.
///
/// File paths are opened here, so an unusable path fails now rather than on
/// the first write. A path listed twice resolves to one shared handle.
pub fn resolve(destinations: &[Destination]) -> Result<Vec<SinkRef>> {
    let mut files: HashMap<&str, SinkRef> = HashMap::new();
    let mut resolved = Vec::with_capacity(destinations.len());

    for destination in destinations {
        let sink = match destination {
            Destination::Sink(sink) => Arc::clone(sink),
            Destination::Named(name) => match name.as_str() {
                "stdout" => ConsoleSink::stdout(),
                "stderr" => ConsoleSink::stderr(),
                "" => {
                    return Err(LoggerError::invalid_destination(
                        "\"\"",
                        "expected \"stdout\", \"stderr\" or a file path",
                    ))
                }
                path => match files.get(path) {
                    Some(sink) => Arc::clone(sink),
                    None => {
                        let sink: SinkRef = Arc::new(FileSink::open(path)?);
                        files.insert(path, Arc::clone(&sink));
                        sink
                    }
                },
            },
        };
        resolved.push(sink);
    }

    Ok(resolved)
}
