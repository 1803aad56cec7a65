//! Logger options: the pre-loaded configuration and its resolved form
//!
//! [`LoggerConfig`] is what an external loader (JSON, TOML, environment)
//! deserializes. [`LoggerOptions`] is the programmatic form, which can also
//! carry sink handles and inline log functions. Resolution opens files and
//! looks up log functions once, producing an immutable [`ResolvedOptions`].

use super::destination::{self, default_destinations, Destination};
use super::error::{LoggerError, Result};
use super::log_function::{LogFunctionRef, LogFunctionRegistry, LogFunctionSpec, DEFAULT_TEXT};
use super::log_level::LogLevel;
use super::sink::{Destinations, SinkRef};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Level used when none is configured.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Debug;

/// Configuration as produced by a configuration loader.
///
/// ```
/// use tagged_logger::{LoggerConfig, LoggerOptions};
///
/// let config: LoggerConfig = serde_json::from_str(
///     r#"{"level": "info", "destinations": ["stdout", "stderr"], "logFunction": "defaultJson"}"#,
/// ).unwrap();
/// let options = LoggerOptions::try_from(config).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: Option<String>,

    /// Stream names or file paths; anything else is rejected on conversion.
    #[serde(default)]
    pub destinations: Option<Vec<Value>>,

    #[serde(default, alias = "logFunction")]
    pub log_functions: Option<OneOrMany>,
}

/// A single name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(name) => vec![name],
            OneOrMany::Many(names) => names,
        }
    }
}

/// Programmatic logger options. Absent fields take the defaults: level
/// DEBUG, destinations `[stdout, stderr]`, log function `defaultText`.
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    pub level: Option<LogLevel>,
    pub destinations: Option<Vec<Destination>>,
    pub log_functions: Option<Vec<LogFunctionSpec>>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Append a destination; the first one added is the primary.
    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: impl Into<Destination>) -> Self {
        self.destinations
            .get_or_insert_with(Vec::new)
            .push(destination.into());
        self
    }

    /// Append a caller-supplied sink as the next destination.
    #[must_use = "builder methods return a new value"]
    pub fn sink(self, sink: SinkRef) -> Self {
        self.destination(Destination::Sink(sink))
    }

    /// Append a log function, by registered name or inline.
    #[must_use = "builder methods return a new value"]
    pub fn log_function(mut self, function: impl Into<LogFunctionSpec>) -> Self {
        self.log_functions
            .get_or_insert_with(Vec::new)
            .push(function.into());
        self
    }

    /// Open destinations and look up log functions.
    pub fn resolve(&self, registry: &LogFunctionRegistry) -> Result<ResolvedOptions> {
        let level = self.level.unwrap_or(DEFAULT_LEVEL);

        let destinations = match self.destinations {
            Some(ref destinations) => destination::resolve(destinations)?,
            None => destination::resolve(&default_destinations())?,
        };

        let log_functions = match self.log_functions {
            Some(ref specs) => registry.resolve_all(specs)?,
            None => vec![registry.resolve(&LogFunctionSpec::from(DEFAULT_TEXT))?],
        };

        Ok(ResolvedOptions {
            level,
            destinations: Arc::from(destinations),
            log_functions: Arc::from(log_functions),
        })
    }
}

impl TryFrom<LoggerConfig> for LoggerOptions {
    type Error = LoggerError;

    fn try_from(config: LoggerConfig) -> Result<Self> {
        let level = config
            .level
            .map(|token| token.parse::<LogLevel>())
            .transpose()?;

        let destinations = config
            .destinations
            .map(|values| {
                values
                    .into_iter()
                    .map(|value| match value {
                        Value::String(name) => Ok(Destination::Named(name)),
                        other => Err(LoggerError::invalid_destination(
                            other.to_string(),
                            "expected \"stdout\", \"stderr\" or a file path",
                        )),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let log_functions = config.log_functions.map(|names| {
            names
                .into_vec()
                .into_iter()
                .map(LogFunctionSpec::Named)
                .collect()
        });

        Ok(Self {
            level,
            destinations,
            log_functions,
        })
    }
}

/// Options after resolution; cheap to clone, shared by tag-scoped loggers.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub level: LogLevel,
    pub destinations: Destinations,
    pub log_functions: Arc<[LogFunctionRef]>,
}
