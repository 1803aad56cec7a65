//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level token outside OFF/ERROR/WARN/INFO/DEBUG
    #[error("Invalid log level: '{token}'")]
    InvalidLevel { token: String },

    /// Destination that is neither a stream name, a path nor a sink
    #[error("Invalid destination {destination}: {message}")]
    InvalidDestination {
        destination: String,
        message: String,
    },

    /// Log function reference that cannot be resolved
    #[error("Invalid log function '{reference}': {message}")]
    InvalidLogFunction { reference: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A sink write failed after the logger was constructed
    #[error("Write to sink '{sink}' failed: {source}")]
    WriteFailure {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A log function panicked while handling a message
    #[error("Log function '{name}' panicked: {message}")]
    LogFunctionPanicked { name: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(token: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            token: token.into(),
        }
    }

    /// Create an invalid destination error
    pub fn invalid_destination(
        destination: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LoggerError::InvalidDestination {
            destination: destination.into(),
            message: message.into(),
        }
    }

    /// Create an invalid log function error
    pub fn invalid_log_function(reference: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidLogFunction {
            reference: reference.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a write failure for the named sink
    pub fn write_failure(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::WriteFailure {
            sink: sink.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// True for the configuration family: bad level, destination or log function
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidLevel { .. }
                | LoggerError::InvalidDestination { .. }
                | LoggerError::InvalidLogFunction { .. }
        )
    }
}
