//! Logging macros for ergonomic printf-style calls.
//!
//! Each macro takes a logger, a primary argument (template or
//! [`ErrorValue`](crate::ErrorValue)) and any number of serializable format
//! arguments, and evaluates to the logger's future.
//!
//! # Examples
//!
//! ```
//! use tagged_logger::prelude::*;
//! use tagged_logger::info;
//!
//! # async fn run(logger: &Logger) -> Result<()> {
//! // Basic logging
//! info!(logger, "Server started").await?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port %d", port).await?;
//!
//! // Any serializable value
//! let user = vec!["alice", "admin"];
//! info!(logger, "User %j performed %s", user, "login").await?;
//! # Ok(())
//! # }
//! ```

/// Log at a level given as a token.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # async fn run(logger: &Logger) -> Result<()> {
/// use tagged_logger::log;
/// log!(logger, "info", "Simple message").await?;
/// log!(logger, "error", "Error code: %d", 500).await?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $primary:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $level,
            $primary,
            &[$($crate::core::format_args::to_arg(&$arg)),*],
        )
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # async fn run(logger: &Logger) -> Result<()> {
/// use tagged_logger::error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// error!(logger, ErrorValue::from_error(&err)).await?;
/// error!(logger, "Connection lost after %d retries", 3).await?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $primary:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(
            $primary,
            &[$($crate::core::format_args::to_arg(&$arg)),*],
        )
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # async fn run(logger: &Logger) -> Result<()> {
/// use tagged_logger::warn;
/// warn!(logger, "Memory usage: %d%%", 85).await?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $primary:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(
            $primary,
            &[$($crate::core::format_args::to_arg(&$arg)),*],
        )
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $primary:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(
            $primary,
            &[$($crate::core::format_args::to_arg(&$arg)),*],
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # async fn run(logger: &Logger) -> Result<()> {
/// use tagged_logger::debug;
/// debug!(logger, "Counter value: %d", 10).await?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $primary:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(
            $primary,
            &[$($crate::core::format_args::to_arg(&$arg)),*],
        )
    };
}
