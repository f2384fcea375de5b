//! Error types for the Speakeasy clients

use std::fmt;

use thiserror::Error;

/// Which upstream API produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    TextGeneration,
    SpeechSynthesis,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::TextGeneration => f.write_str("Text generation API"),
            Upstream::SpeechSynthesis => f.write_str("Speech synthesis API"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("{service} returned {status} - {body}")]
    UpstreamError {
        service: Upstream,
        status: u16,
        body: String,
    },

    #[error("Unexpected response format: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}
