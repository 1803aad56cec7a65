//! Message model: the immutable record built once per log call

use super::format_args::format_message;
use super::log_level::LogLevel;
use super::timestamp::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

/// Tag that forces a message past the level filter.
pub const ALWAYS_TAG: &str = "always";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub tags: Vec<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl Message {
    /// Build the message for one log call.
    ///
    /// `logger_tags` come first, then `call_tags`, order and duplicates kept.
    pub fn build(
        level: LogLevel,
        logger_tags: &[String],
        call_tags: &[String],
        primary: &Primary,
        args: &[Value],
    ) -> Self {
        let mut tags = Vec::with_capacity(logger_tags.len() + call_tags.len());
        tags.extend_from_slice(logger_tags);
        tags.extend_from_slice(call_tags);

        let (text, stack) = match primary {
            Primary::Text(template) => (format_message(template, args), None),
            Primary::Error(err) => (err.to_string(), Some(err.stack.clone())),
        };

        Self {
            timestamp: Utc::now(),
            level,
            tags,
            text,
            stack,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Tags accepted by the tagged log operations: one tag or a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Tags {
    fn from(tag: &str) -> Self {
        Tags(vec![tag.to_string()])
    }
}

impl From<String> for Tags {
    fn from(tag: String) -> Self {
        Tags(vec![tag])
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Tags(tags)
    }
}

impl From<Vec<&str>> for Tags {
    fn from(tags: Vec<&str>) -> Self {
        Tags(tags.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Tags {
    fn from(tags: &[&str]) -> Self {
        Tags(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Tags {
    fn from(tags: [&str; N]) -> Self {
        Tags(tags.iter().map(|t| t.to_string()).collect())
    }
}

/// First argument of a log call: a template or an error value.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    Text(String),
    Error(ErrorValue),
}

impl From<&str> for Primary {
    fn from(s: &str) -> Self {
        Primary::Text(s.to_string())
    }
}

impl From<String> for Primary {
    fn from(s: String) -> Self {
        Primary::Text(s)
    }
}

impl From<&String> for Primary {
    fn from(s: &String) -> Self {
        Primary::Text(s.clone())
    }
}

impl From<ErrorValue> for Primary {
    fn from(err: ErrorValue) -> Self {
        Primary::Error(err)
    }
}

/// An error captured for logging: renders as `"{name}: {message}"` and carries
/// a trace string starting with that same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    pub name: String,
    pub message: String,
    pub stack: String,
}

impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        let message = message.into();
        let stack = format!("{}: {}", name, message);
        Self {
            name,
            message,
            stack,
        }
    }

    /// Capture `err`, its source chain and, when enabled through
    /// `RUST_BACKTRACE`, a backtrace of the logging call site.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let mut value = Self::new(short_type_name::<E>(), err.to_string());

        let mut source = err.source();
        while let Some(cause) = source {
            value.stack.push_str("\n    caused by: ");
            value.stack.push_str(&cause.to_string());
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            value.stack.push('\n');
            value.stack.push_str(&backtrace.to_string());
        }

        value
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// `std::io::Error` -> `Error`, `my_crate::errors::ParseError<T>` -> `ParseError`.
fn short_type_name<E: ?Sized>() -> String {
    let full = std::any::type_name::<E>();
    if full.starts_with("dyn ") {
        return "Error".to_string();
    }
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
