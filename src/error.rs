use thiserror::Error;

/// Custom error types for urlbar
#[derive(Debug, Error)]
pub enum UrlbarError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid session file: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
