//! # Tagged Logger
//!
//! Leveled, tagged, structured logging for server-side applications.
//!
//! ## Features
//!
//! - **Level filtering**: OFF < ERROR < WARN < INFO < DEBUG, with an `"always"`
//!   tag that bypasses the filter
//! - **Tags**: accumulated from logger creation and per call
//! - **Fan-out**: WARN and ERROR also reach a secondary destination, without
//!   printing twice on one interactive console
//! - **Pluggable log functions**: text and JSON lines built in, custom
//!   functions registered by name or passed inline
//!
//! ```
//! use tagged_logger::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let capture = Arc::new(MemorySink::new("capture"));
//! let factory = LoggerFactory::new(
//!     LoggerOptions::new()
//!         .level(LogLevel::Info)
//!         .sink(capture.clone())
//!         .log_function(DEFAULT_JSON),
//! )?;
//!
//! let logger = factory.logger("startup");
//! logger.info("hello %s", &["world".into()]).await?;
//! logger.debug("filtered out", &[]).await?;
//!
//! assert_eq!(capture.lines().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod log_functions;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Destination, ErrorValue, LogFunction, LogFunctionRegistry, LogLevel, Logger,
        LoggerConfig, LoggerError, LoggerFactory, LoggerMetrics, LoggerOptions, Message,
        Primary, Result, Sink, SinkRef, Tags, TimestampFormat, ALWAYS_TAG, DEFAULT_JSON,
        DEFAULT_TEXT,
    };
    pub use crate::log_functions::{JsonLogFunction, TextLogFunction};
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
}

pub use crate::core::{
    is_at_least_as_verbose, log_fn, Destination, Destinations, ErrorValue, LogFunction,
    LogFunctionRef, LogFunctionRegistry, LogFunctionSpec, LogLevel, Logger, LoggerConfig,
    LoggerError, LoggerFactory, LoggerMetrics, LoggerOptions, Message, Primary, ResolvedOptions,
    Result, Sink, SinkRef, Tags, TimestampFormat, ALWAYS_TAG, DEFAULT_JSON, DEFAULT_TEXT,
};
pub use log_functions::{JsonLogFunction, TextLogFunction};
pub use sinks::{ConsoleSink, FileSink, MemorySink};
