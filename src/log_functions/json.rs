//! JSON lines log function (`defaultJson`)

use super::fan_out::fan_out;
use super::LINE_ENDING;
use crate::core::log_function::DEFAULT_JSON;
use crate::core::{Destinations, LogFunction, Message, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Writes each message as a single-line JSON object (JSONL format)
///
/// Field order is fixed: `timestamp`, `level`, `tags`, `text`, then `stack`
/// when present. Line breaks inside the text are escaped, so every message
/// is exactly one physical line.
#[derive(Debug, Default)]
pub struct JsonLogFunction;

impl JsonLogFunction {
    pub fn new() -> Self {
        Self
    }

    /// Format one message, line terminator included.
    pub fn format(&self, message: &Message) -> Result<String> {
        let mut line = serde_json::to_string(message)?;
        line.push_str(LINE_ENDING);
        Ok(line)
    }
}

#[async_trait]
impl LogFunction for JsonLogFunction {
    async fn log(
        &self,
        message: Arc<Message>,
        should_log: bool,
        destinations: Destinations,
    ) -> Result<()> {
        if !should_log {
            return Ok(());
        }
        let line = self.format(&message)?;
        fan_out(message.level, line.as_bytes(), &destinations).await
    }

    fn name(&self) -> &str {
        DEFAULT_JSON
    }
}
