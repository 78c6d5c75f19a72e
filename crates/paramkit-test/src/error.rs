//! Test error types.

use std::fmt;

/// Errors that can occur while setting up a test.
#[derive(Debug)]
pub enum TestError {
    /// Request building failed
    RequestBuild(String),
    /// Logging subscriber could not be installed
    Logging(String),
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestBuild(msg) => write!(f, "Request build error: {msg}"),
            Self::Logging(msg) => write!(f, "Logging error: {msg}"),
        }
    }
}

impl std::error::Error for TestError {}
