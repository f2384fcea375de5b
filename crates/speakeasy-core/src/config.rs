//! Configuration types for the Speakeasy service
//!
//! Settings come from an optional `speakeasy.toml` in the working directory,
//! overridden by process environment variables. The result is an immutable
//! [`AppConfig`] that is built once at startup and handed to the clients.

use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::error::Result;

/// Prompt used when `SLEAZY_PERSONALITY` is not set
pub const FALLBACK_PROMPT: &str = "Default fallback prompt";

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "speakeasy";

/// Flat settings as they appear in the environment (lowercased) or in the file
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    grok_api_url: Option<String>,
    xai_api_key: Option<String>,
    sleazy_personality: Option<String>,
    grok_model: Option<String>,
    elevenlabs_api_key: Option<String>,
    elevenlabs_voice_id: Option<String>,
    elevenlabs_base_url: Option<String>,
    upstream_timeout_secs: Option<u64>,
    speakeasy_host: Option<String>,
    speakeasy_port: Option<u16>,
    speakeasy_cors: Option<bool>,
}

/// Complete process configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// Prompt sent to the text generation API on every request
    pub prompt: String,

    pub text_generation: TextGenerationConfig,
    pub speech_synthesis: SpeechSynthesisConfig,
}

impl AppConfig {
    /// Load from `speakeasy.toml` (if present) and the process environment
    pub fn load() -> Result<Self> {
        let source = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::default())
            .build()?;
        Self::from_config(source)
    }

    /// Build from an already assembled configuration source
    pub fn from_config(source: config::Config) -> Result<Self> {
        let raw: RawSettings = source.try_deserialize()?;

        let timeout = raw
            .upstream_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(default_timeout);

        Ok(Self {
            server: ServerConfig {
                host: non_empty(raw.speakeasy_host).unwrap_or_else(default_host),
                port: raw.speakeasy_port.unwrap_or_else(default_port),
                cors_enabled: raw.speakeasy_cors.unwrap_or(false),
            },
            prompt: non_empty(raw.sleazy_personality)
                .unwrap_or_else(|| FALLBACK_PROMPT.to_string()),
            text_generation: TextGenerationConfig {
                endpoint: non_empty(raw.grok_api_url),
                api_key: non_empty(raw.xai_api_key),
                model: non_empty(raw.grok_model).unwrap_or_else(default_model),
                timeout,
            },
            speech_synthesis: SpeechSynthesisConfig {
                base_url: non_empty(raw.elevenlabs_base_url).unwrap_or_else(default_base_url),
                api_key: non_empty(raw.elevenlabs_api_key),
                voice_id: non_empty(raw.elevenlabs_voice_id),
                timeout,
            },
        })
    }

    /// Log the effective configuration with credentials masked
    pub fn log_summary(&self) {
        info!("Text generation endpoint: {:?}", self.text_generation.endpoint);
        info!("Text generation model: {}", self.text_generation.model);
        info!(
            "Text generation key: {}",
            mask(&self.text_generation.api_key)
        );
        info!("Speech synthesis base URL: {}", self.speech_synthesis.base_url);
        info!(
            "Speech synthesis key: {}",
            mask(&self.speech_synthesis.api_key)
        );
        info!(
            "Speech synthesis voice: {:?}",
            self.speech_synthesis.voice_id
        );
        info!("Prompt: {}...", self.prompt.chars().take(50).collect::<String>());
    }
}

/// Chat-completion API settings
#[derive(Debug, Clone)]
pub struct TextGenerationConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            model: default_model(),
            timeout: default_timeout(),
        }
    }
}

/// Text-to-speech API settings
#[derive(Debug, Clone)]
pub struct SpeechSynthesisConfig {
    /// API root; the voice endpoint is `{base_url}/text-to-speech/{voice_id}`
    pub base_url: String,
    pub api_key: Option<String>,
    pub voice_id: Option<String>,
    pub timeout: Duration,
}

impl Default for SpeechSynthesisConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            voice_id: None,
            timeout: default_timeout(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_enabled: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: false,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn mask(secret: &Option<String>) -> &'static str {
    if secret.is_some() {
        "<set>"
    } else {
        "<missing>"
    }
}

fn default_model() -> String {
    "grok-2-1212".to_string()
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io/v1".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}
