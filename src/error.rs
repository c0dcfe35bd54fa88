//! Error types for akarkata.
//!
//! Stemming itself never fails; these cover loading a dictionary and
//! configuring the CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dictionary error on line {line}: {reason}")]
    Dictionary { line: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
