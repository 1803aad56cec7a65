//! Main logger implementation

use super::{
    error::Result,
    log_function::{invoke_all, LogFunctionRef, LogFunctionRegistry},
    log_level::LogLevel,
    message::{Message, Primary, Tags, ALWAYS_TAG},
    metrics::LoggerMetrics,
    options::{LoggerConfig, LoggerOptions, ResolvedOptions},
    sink::{Destinations, SinkRef},
};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

/// Composition root for loggers.
///
/// Options are resolved once, when the factory is built; every logger it
/// hands out shares that resolution and differs only by its tags. To apply
/// different options, build another factory.
///
/// # Example
/// ```
/// use tagged_logger::prelude::*;
///
/// # async fn run() -> Result<()> {
/// let factory = LoggerFactory::new(LoggerOptions::new().level(LogLevel::Info))?;
///
/// let db = factory.logger("db");
/// db.info("connected to %s", &["primary".into()]).await?;
///
/// let pool = db.child("pool");
/// pool.debug("not shown at INFO", &[]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LoggerFactory {
    options: ResolvedOptions,
    metrics: Arc<LoggerMetrics>,
}

impl LoggerFactory {
    /// Resolve `options` against the built-in log functions.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        Self::with_registry(options, &LogFunctionRegistry::new())
    }

    /// Resolve `options`, looking log function names up in `registry`.
    pub fn with_registry(options: LoggerOptions, registry: &LogFunctionRegistry) -> Result<Self> {
        Ok(Self::from_resolved(options.resolve(registry)?))
    }

    /// Validate and resolve a loaded configuration.
    pub fn from_config(config: LoggerConfig, registry: &LogFunctionRegistry) -> Result<Self> {
        Self::with_registry(LoggerOptions::try_from(config)?, registry)
    }

    pub fn from_resolved(options: ResolvedOptions) -> Self {
        Self {
            options,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// A logger carrying `tags` on every message.
    pub fn logger(&self, tags: impl Into<Tags>) -> Logger {
        Logger::from_parts(
            self.options.clone(),
            tags.into().into_vec(),
            Arc::clone(&self.metrics),
        )
    }

    /// A logger without tags.
    pub fn root(&self) -> Logger {
        self.logger(Tags::new())
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Metrics shared by every logger of this factory
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

/// Leveled, tagged logger.
///
/// Every operation returns once all writes it started have completed. Level,
/// destinations and log functions can be swapped between calls; a call reads
/// them once, when it starts.
pub struct Logger {
    state: RwLock<ResolvedOptions>,
    tags: Vec<String>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Build a standalone logger. Equivalent to
    /// `LoggerFactory::new(options)?.logger(tags)`.
    pub fn new(options: LoggerOptions, tags: impl Into<Tags>) -> Result<Self> {
        Ok(LoggerFactory::new(options)?.logger(tags))
    }

    fn from_parts(options: ResolvedOptions, tags: Vec<String>, metrics: Arc<LoggerMetrics>) -> Self {
        Self {
            state: RwLock::new(options),
            tags,
            metrics,
        }
    }

    /// Derive a logger with this logger's current options and `tags`
    /// appended to its own.
    pub fn child(&self, tags: impl Into<Tags>) -> Logger {
        let mut merged = self.tags.clone();
        merged.extend(tags.into().into_vec());
        Logger::from_parts(self.state.read().clone(), merged, Arc::clone(&self.metrics))
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn level(&self) -> LogLevel {
        self.state.read().level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.state.write().level = level;
    }

    /// Replace the destinations, already resolved.
    pub fn set_destinations(&self, destinations: Vec<SinkRef>) {
        self.state.write().destinations = Destinations::from(destinations);
    }

    pub fn set_log_functions(&self, log_functions: Vec<LogFunctionRef>) {
        self.state.write().log_functions = Arc::from(log_functions);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn is_error_or_verboser(&self) -> bool {
        self.level().is_at_least_as_verbose(LogLevel::Error)
    }

    #[inline]
    pub fn is_warn_or_verboser(&self) -> bool {
        self.level().is_at_least_as_verbose(LogLevel::Warn)
    }

    #[inline]
    pub fn is_info_or_verboser(&self) -> bool {
        self.level().is_at_least_as_verbose(LogLevel::Info)
    }

    #[inline]
    pub fn is_debug_or_verboser(&self) -> bool {
        self.level().is_at_least_as_verbose(LogLevel::Debug)
    }

    /// Log at a level given as a token such as `"warn"`.
    ///
    /// Unknown tokens fail with [`LoggerError::InvalidLevel`](super::LoggerError::InvalidLevel).
    pub async fn log(&self, level: &str, primary: impl Into<Primary>, args: &[Value]) -> Result<()> {
        self.log_with_tags(level, Tags::new(), primary, args).await
    }

    pub async fn log_with_tags(
        &self,
        level: &str,
        tags: impl Into<Tags>,
        primary: impl Into<Primary>,
        args: &[Value],
    ) -> Result<()> {
        let level = LogLevel::from_token(&level.to_uppercase())?;
        self.dispatch(level, tags.into(), primary.into(), args).await
    }

    #[inline]
    pub async fn error(&self, primary: impl Into<Primary>, args: &[Value]) -> Result<()> {
        self.dispatch(LogLevel::Error, Tags::new(), primary.into(), args).await
    }

    #[inline]
    pub async fn warn(&self, primary: impl Into<Primary>, args: &[Value]) -> Result<()> {
        self.dispatch(LogLevel::Warn, Tags::new(), primary.into(), args).await
    }

    #[inline]
    pub async fn info(&self, primary: impl Into<Primary>, args: &[Value]) -> Result<()> {
        self.dispatch(LogLevel::Info, Tags::new(), primary.into(), args).await
    }

    #[inline]
    pub async fn debug(&self, primary: impl Into<Primary>, args: &[Value]) -> Result<()> {
        self.dispatch(LogLevel::Debug, Tags::new(), primary.into(), args).await
    }

    pub async fn error_with_tags(
        &self,
        tags: impl Into<Tags>,
        primary: impl Into<Primary>,
        args: &[Value],
    ) -> Result<()> {
        self.dispatch(LogLevel::Error, tags.into(), primary.into(), args).await
    }

    pub async fn warn_with_tags(
        &self,
        tags: impl Into<Tags>,
        primary: impl Into<Primary>,
        args: &[Value],
    ) -> Result<()> {
        self.dispatch(LogLevel::Warn, tags.into(), primary.into(), args).await
    }

    pub async fn info_with_tags(
        &self,
        tags: impl Into<Tags>,
        primary: impl Into<Primary>,
        args: &[Value],
    ) -> Result<()> {
        self.dispatch(LogLevel::Info, tags.into(), primary.into(), args).await
    }

    pub async fn debug_with_tags(
        &self,
        tags: impl Into<Tags>,
        primary: impl Into<Primary>,
        args: &[Value],
    ) -> Result<()> {
        self.dispatch(LogLevel::Debug, tags.into(), primary.into(), args).await
    }

    /// Filter, build the message and hand it to every log function.
    ///
    /// The message is built even when filtered out; callers with expensive
    /// arguments should check `is_*_or_verboser` first.
    async fn dispatch(
        &self,
        level: LogLevel,
        tags: Tags,
        primary: Primary,
        args: &[Value],
    ) -> Result<()> {
        let snapshot = self.state.read().clone();

        let always = self
            .tags
            .iter()
            .chain(tags.as_slice())
            .any(|tag| tag == ALWAYS_TAG);
        let should_log = always
            || (level != LogLevel::Off && snapshot.level.is_at_least_as_verbose(level));

        let message = Arc::new(Message::build(
            level,
            &self.tags,
            tags.as_slice(),
            &primary,
            args,
        ));

        self.metrics.record_dispatched();
        if !should_log {
            self.metrics.record_suppressed();
        }

        let result = invoke_all(
            &snapshot.log_functions,
            message,
            should_log,
            snapshot.destinations,
        )
        .await;

        if result.is_err() {
            self.metrics.record_failed();
        }
        result
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("tags", &self.tags)
            .finish()
    }
}
