//! Log level definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a message, ordered from least to most verbose.
///
/// A logger configured at level `L` lets through every message whose level is
/// at most as verbose as `L`. `Off` lets nothing through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    #[default]
    Debug = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "OFF",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Position in the ordering, `Off` being 0.
    #[inline]
    pub fn position(&self) -> u8 {
        *self as u8
    }

    /// Parse an exact, already uppercased token.
    pub fn from_token(token: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.to_str() == token)
            .ok_or_else(|| LoggerError::invalid_level(token))
    }

    /// True if `self` is at least as verbose as `other`.
    #[inline]
    pub fn is_at_least_as_verbose(self, other: LogLevel) -> bool {
        self >= other
    }

    /// Strictly less verbose than INFO: these also go to the secondary destination.
    #[inline]
    pub(crate) fn routes_to_secondary(self) -> bool {
        self < LogLevel::Info
    }
}

/// Compare two level tokens.
///
/// The first token is uppercased before lookup, the second must already be an
/// uppercase member of the ordering. Unknown tokens fail with
/// [`LoggerError::InvalidLevel`].
///
/// ```
/// use tagged_logger::core::log_level::is_at_least_as_verbose;
///
/// assert!(is_at_least_as_verbose("debug", "INFO").unwrap());
/// assert!(!is_at_least_as_verbose("warn", "INFO").unwrap());
/// assert!(is_at_least_as_verbose("trace", "INFO").is_err());
/// ```
pub fn is_at_least_as_verbose(a: &str, b: &str) -> Result<bool> {
    let a = LogLevel::from_token(&a.to_uppercase())?;
    let b = LogLevel::from_token(b)?;
    Ok(a.is_at_least_as_verbose(b))
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "WARNING" => Ok(LogLevel::Warn),
            upper => LogLevel::from_token(upper).map_err(|_| LoggerError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Off < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_token_comparison() {
        assert!(is_at_least_as_verbose("INFO", "INFO").unwrap());
        assert!(is_at_least_as_verbose("info", "ERROR").unwrap());
        assert!(!is_at_least_as_verbose("off", "ERROR").unwrap());
        assert!(is_at_least_as_verbose("Off", "OFF").unwrap());
    }

    #[test]
    fn test_second_token_is_case_sensitive() {
        let err = is_at_least_as_verbose("DEBUG", "info").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { ref token } if token == "info"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("Debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("fatal".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>5}", LogLevel::Info), " INFO");
        assert_eq!(format!("{:>5}", LogLevel::Error), "ERROR");
    }

    #[test]
    fn test_secondary_routing() {
        assert!(LogLevel::Error.routes_to_secondary());
        assert!(LogLevel::Warn.routes_to_secondary());
        assert!(!LogLevel::Info.routes_to_secondary());
        assert!(!LogLevel::Debug.routes_to_secondary());
    }
}
