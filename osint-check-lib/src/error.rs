//! Error handling for OSINT lookup operations.
//!
//! This module defines a comprehensive error type that covers all the different
//! ways a lookup can fail, from unparseable phone numbers to network issues.

use std::fmt;

/// Main error type for OSINT lookup operations.
///
/// This enum covers all possible failure modes in phone lookup and username
/// probing, providing detailed context for debugging and user-friendly
/// error messages.
#[derive(Debug, Clone)]
pub enum OsintCheckError {
    /// Phone number that cannot be parsed against the numbering plan
    InvalidNumber { number: String, reason: String },

    /// Username rejected before any request is issued
    InvalidUsername { username: String, reason: String },

    /// Network-related errors (connection, DNS, TLS, etc.)
    NetworkError {
        message: String,
        source: Option<String>,
    },

    /// Timeout errors when operations take too long
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },

    /// Configuration errors (invalid settings, bad TOML, etc.)
    ConfigError { message: String },

    /// File I/O errors when reading config files
    FileError { path: String, message: String },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl OsintCheckError {
    /// Create a new invalid number error.
    pub fn invalid_number<N: Into<String>, R: Into<String>>(number: N, reason: R) -> Self {
        Self::InvalidNumber {
            number: number.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid username error.
    pub fn invalid_username<U: Into<String>, R: Into<String>>(username: U, reason: R) -> Self {
        Self::InvalidUsername {
            username: username.into(),
            reason: reason.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for OsintCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { number, reason } => {
                write!(f, "Invalid phone number '{}': {}", number, reason)
            }
            Self::InvalidUsername { username, reason } => {
                write!(f, "Invalid username '{}': {}", username, reason)
            }
            Self::NetworkError { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for OsintCheckError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_number() {
        let err = OsintCheckError::invalid_number("abc", "no digits");
        assert_eq!(err.to_string(), "Invalid phone number 'abc': no digits");
    }

    #[test]
    fn test_display_timeout() {
        let err = OsintCheckError::timeout("GET", std::time::Duration::from_secs(1));
        assert!(err.to_string().contains("Timeout after 1s"));
    }

    #[test]
    fn test_network_with_source_display() {
        let err = OsintCheckError::network_with_source("Connection failed", "dns error");
        let msg = err.to_string();
        assert!(msg.contains("Connection failed"));
        assert!(msg.contains("dns error"));
    }
}
