//! Unified error types and result handling.

use std::fmt;
use thiserror::Error;

/// Notification channel that produced a delivery failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Email delivery
    Email,
    /// SMS delivery
    Sms,
    /// Push notification delivery
    Push,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Push => "push",
        };
        f.write_str(name)
    }
}

/// Errors produced by the samples and the demo binary.
#[derive(Debug, Error)]
pub enum Error {
    /// Required user fields were missing or empty
    #[error("Validation error: {message}")]
    Validation {
        /// What failed validation
        message: String,
    },

    /// A notification channel failed to deliver
    #[error("Delivery error on {channel}: {message}")]
    Delivery {
        /// Channel that failed
        channel: Channel,
        /// Failure detail
        message: String,
    },

    /// Package dimensions were negative or not finite
    #[error("Invalid package: weight {weight}, distance {distance}")]
    InvalidPackage {
        /// Rejected weight
        weight: f64,
        /// Rejected distance
        distance: f64,
    },

    /// CSV export failed
    #[error("Export error: {message}")]
    Export {
        /// Failure detail
        message: String,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Failure detail
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Export {
            message: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_names_channel() {
        let err = Error::Delivery {
            channel: Channel::Sms,
            message: "gateway down".to_string(),
        };
        assert_eq!(err.to_string(), "Delivery error on sms: gateway down");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
