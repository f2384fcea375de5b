//! Speech synthesis client for an ElevenLabs-style text-to-speech API

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SpeechSynthesisConfig;
use crate::error::{Error, Result, Upstream};

/// MIME type assumed when the upstream does not report an audio type
pub const DEFAULT_AUDIO_MIME: &str = "audio/mpeg";

/// Voice tuning sent with every synthesis call
#[derive(Debug, Clone, Copy, Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
    style_exaggeration: f64,
}

const VOICE_SETTINGS: VoiceSettings = VoiceSettings {
    stability: 0.6,
    similarity_boost: 0.9,
    style_exaggeration: 0.0,
};

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    voice_settings: VoiceSettings,
}

/// Encoded audio returned by the synthesis API
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Issues a single text-to-speech call per text
pub struct SpeechSynthesizer {
    config: SpeechSynthesisConfig,
    client: Client,
}

impl SpeechSynthesizer {
    pub fn new(config: SpeechSynthesisConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Synthesize `text`, buffering the whole audio body.
    pub async fn synthesize(&self, text: &str) -> Result<AudioPayload> {
        let (api_key, voice_id) = match (&self.config.api_key, &self.config.voice_id) {
            (Some(api_key), Some(voice_id)) => (api_key, voice_id),
            _ => {
                return Err(Error::ConfigurationMissing(
                    "ELEVENLABS_API_KEY or ELEVENLABS_VOICE_ID".to_string(),
                ))
            }
        };

        let url = format!(
            "{}/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            voice_id
        );
        debug!("Synthesizing {} chars via {}", text.len(), url);

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .json(&SynthesizeRequest {
                text,
                voice_settings: VOICE_SETTINGS,
            })
            .send()
            .await?;

        let status = response.status();
        info!("Speech synthesis status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::UpstreamError {
                service: Upstream::SpeechSynthesis,
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.starts_with("audio/"))
            .unwrap_or(DEFAULT_AUDIO_MIME)
            .to_string();

        let bytes = response.bytes().await?;
        debug!("Received {} bytes of {}", bytes.len(), content_type);

        Ok(AudioPayload {
            bytes,
            content_type,
        })
    }
}
