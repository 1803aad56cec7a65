//! Human-readable text log function (`defaultText`)

use super::fan_out::fan_out;
use super::LINE_ENDING;
use crate::core::log_function::DEFAULT_TEXT;
use crate::core::{Destinations, LogFunction, Message, Result, TimestampFormat};
use async_trait::async_trait;
use std::sync::Arc;

/// Renders `{timestamp} {level} [{tags}] - {text}` lines.
///
/// ```text
/// 2025-01-08T10:30:45.123Z  INFO [db, pool] - connected
/// 2025-01-08T10:30:45.124Z ERROR [db] - Error: refused STACK: Error: refused
/// ```
pub struct TextLogFunction {
    timestamp_format: TimestampFormat,
}

impl TextLogFunction {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this log function
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_logger::log_functions::TextLogFunction;
    /// use tagged_logger::TimestampFormat;
    ///
    /// let text = TextLogFunction::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format one message, line terminator included.
    pub fn format(&self, message: &Message) -> String {
        let mut line = format!(
            "{} {:>5.5} [{}] - {}",
            self.timestamp_format.format(&message.timestamp),
            message.level,
            message.tags.join(", "),
            message.text
        );
        if let Some(ref stack) = message.stack {
            line.push_str(" STACK: ");
            line.push_str(stack);
        }
        line.push_str(LINE_ENDING);
        line
    }
}

impl Default for TextLogFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogFunction for TextLogFunction {
    async fn log(
        &self,
        message: Arc<Message>,
        should_log: bool,
        destinations: Destinations,
    ) -> Result<()> {
        if !should_log {
            return Ok(());
        }
        let line = self.format(&message);
        fan_out(message.level, line.as_bytes(), &destinations).await
    }

    fn name(&self) -> &str {
        DEFAULT_TEXT
    }
}
