//! Log functions: pluggable strategies turning a message into sink writes
//!
//! A logger carries one or more log functions. Each receives the shared
//! message, the filtering decision and the resolved destinations; their
//! completions are joined, with no ordering between them.

use super::error::{LoggerError, Result};
use super::message::Message;
use super::sink::Destinations;
use crate::log_functions::{JsonLogFunction, TextLogFunction};
use async_trait::async_trait;
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use std::collections::HashMap;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

pub const DEFAULT_TEXT: &str = "defaultText";
pub const DEFAULT_JSON: &str = "defaultJson";

/// Strategy invoked once per log call.
///
/// When `should_log` is false the message was filtered out; built-in
/// functions then complete without touching any sink.
#[async_trait]
pub trait LogFunction: Send + Sync {
    async fn log(
        &self,
        message: Arc<Message>,
        should_log: bool,
        destinations: Destinations,
    ) -> Result<()>;

    fn name(&self) -> &str;
}

pub type LogFunctionRef = Arc<dyn LogFunction>;

impl fmt::Debug for dyn LogFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LogFunction").field(&self.name()).finish()
    }
}

type Callback =
    dyn Fn(Arc<Message>, bool, Destinations) -> BoxFuture<'static, Result<()>> + Send + Sync;

/// Adapter turning a closure into a [`LogFunction`].
pub struct CallbackLogFunction {
    name: String,
    callback: Box<Callback>,
}

#[async_trait]
impl LogFunction for CallbackLogFunction {
    async fn log(
        &self,
        message: Arc<Message>,
        should_log: bool,
        destinations: Destinations,
    ) -> Result<()> {
        (self.callback)(message, should_log, destinations).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrap a closure as a log function.
///
/// # Example
///
/// ```
/// use tagged_logger::core::log_function::log_fn;
/// use tagged_logger::core::LogFunction;
/// use futures::FutureExt;
///
/// let count_only = log_fn("countOnly", |message, should_log, _destinations| {
///     async move {
///         if should_log {
///             println!("{} chars", message.text.len());
///         }
///         Ok(())
///     }
///     .boxed()
/// });
/// assert_eq!(count_only.name(), "countOnly");
/// ```
pub fn log_fn<F>(name: impl Into<String>, callback: F) -> LogFunctionRef
where
    F: Fn(Arc<Message>, bool, Destinations) -> BoxFuture<'static, Result<()>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(CallbackLogFunction {
        name: name.into(),
        callback: Box::new(callback),
    })
}

/// A configured log function before resolution.
#[derive(Clone, Debug)]
pub enum LogFunctionSpec {
    /// Name looked up in a [`LogFunctionRegistry`]
    Named(String),
    /// A function value supplied directly
    Inline(LogFunctionRef),
}

impl From<&str> for LogFunctionSpec {
    fn from(name: &str) -> Self {
        LogFunctionSpec::Named(name.to_string())
    }
}

impl From<String> for LogFunctionSpec {
    fn from(name: String) -> Self {
        LogFunctionSpec::Named(name)
    }
}

impl From<LogFunctionRef> for LogFunctionSpec {
    fn from(function: LogFunctionRef) -> Self {
        LogFunctionSpec::Inline(function)
    }
}

/// Name to log function mapping, pre-populated with `defaultText` and
/// `defaultJson`.
#[derive(Clone)]
pub struct LogFunctionRegistry {
    functions: HashMap<String, LogFunctionRef>,
}

impl LogFunctionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };
        registry.register(DEFAULT_TEXT, Arc::new(TextLogFunction::new()));
        registry.register(DEFAULT_JSON, Arc::new(JsonLogFunction::new()));
        registry
    }

    /// Register `function` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, function: LogFunctionRef) -> &mut Self {
        self.functions.insert(name.into(), function);
        self
    }

    pub fn get(&self, name: &str) -> Option<LogFunctionRef> {
        self.functions.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn resolve(&self, spec: &LogFunctionSpec) -> Result<LogFunctionRef> {
        match spec {
            LogFunctionSpec::Inline(function) => Ok(Arc::clone(function)),
            LogFunctionSpec::Named(name) => {
                if let Some(function) = self.get(name) {
                    return Ok(function);
                }
                if is_module_reference(name) {
                    return Err(LoggerError::invalid_log_function(
                        name,
                        "module references cannot be loaded; register the function \
                         in a LogFunctionRegistry or pass it inline",
                    ));
                }
                Err(LoggerError::invalid_log_function(name, "no such registered log function"))
            }
        }
    }

    pub fn resolve_all(&self, specs: &[LogFunctionSpec]) -> Result<Vec<LogFunctionRef>> {
        specs.iter().map(|spec| self.resolve(spec)).collect()
    }
}

impl Default for LogFunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `"$baseDir/lib/log.js:jsonLines"` style references.
fn is_module_reference(name: &str) -> bool {
    name.starts_with("$baseDir") || name.contains('/') || name.contains(':')
}

/// Invoke every log function for one message and join their completions.
///
/// All functions run to completion even when one fails or panics; the first
/// failure, in registration order, is returned.
pub(crate) async fn invoke_all(
    functions: &[LogFunctionRef],
    message: Arc<Message>,
    should_log: bool,
    destinations: Destinations,
) -> Result<()> {
    let calls = functions.iter().map(|function| {
        let call = function.log(Arc::clone(&message), should_log, Arc::clone(&destinations));
        AssertUnwindSafe(call).catch_unwind().map(move |outcome| match outcome {
            Ok(result) => result,
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Log function '{}' panicked: {}. \
                     Other log functions continue to function.",
                    function.name(),
                    panic_msg
                );
                Err(LoggerError::LogFunctionPanicked {
                    name: function.name().to_string(),
                    message: panic_msg,
                })
            }
        })
        .boxed()
    });

    join_all(calls).await.into_iter().collect::<Result<Vec<()>>>()?;
    Ok(())
}
