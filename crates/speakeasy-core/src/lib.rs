//! Speakeasy Core - text generation and speech synthesis clients
//!
//! A [`Pipeline`] sends a fixed prompt to a chat-completion API, then passes
//! the generated text to a text-to-speech API and returns the encoded audio.
//!
//! # Example
//!
//! ```ignore
//! use speakeasy_core::{AppConfig, Pipeline};
//!
//! let config = AppConfig::load()?;
//! let pipeline = Pipeline::from_config(&config)?;
//! let audio = pipeline.run().await?;
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod pipeline;
pub mod synthesis;

pub use config::{AppConfig, ServerConfig, SpeechSynthesisConfig, TextGenerationConfig};
pub use error::{Error, Result, Upstream};
pub use generation::TextGenerator;
pub use pipeline::{Pipeline, Stage};
pub use synthesis::{AudioPayload, SpeechSynthesizer};
