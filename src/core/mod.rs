//! Core logger types and traits

pub mod destination;
pub mod error;
pub mod format_args;
pub mod log_function;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod options;
pub mod sink;
pub mod timestamp;

pub use destination::Destination;
pub use error::{LoggerError, Result};
pub use log_function::{
    log_fn, LogFunction, LogFunctionRef, LogFunctionRegistry, LogFunctionSpec, DEFAULT_JSON,
    DEFAULT_TEXT,
};
pub use log_level::{is_at_least_as_verbose, LogLevel};
pub use logger::{Logger, LoggerFactory};
pub use message::{ErrorValue, Message, Primary, Tags, ALWAYS_TAG};
pub use metrics::LoggerMetrics;
pub use options::{LoggerConfig, LoggerOptions, OneOrMany, ResolvedOptions, DEFAULT_LEVEL};
pub use sink::{same_sink, Destinations, Sink, SinkRef};
pub use timestamp::TimestampFormat;
