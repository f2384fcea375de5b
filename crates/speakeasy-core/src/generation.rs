//! Text generation client for an OpenAI-style chat-completion API

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TextGenerationConfig;
use crate::error::{Error, Result, Upstream};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Issues a single chat-completion call per prompt
pub struct TextGenerator {
    config: TextGenerationConfig,
    client: Client,
}

impl TextGenerator {
    pub fn new(config: TextGenerationConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Send `prompt` as a single user message and return the first choice's text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let (endpoint, api_key) = match (&self.config.endpoint, &self.config.api_key) {
            (Some(endpoint), Some(api_key)) => (endpoint, api_key),
            _ => {
                return Err(Error::ConfigurationMissing(
                    "GROK_API_URL or XAI_API_KEY".to_string(),
                ))
            }
        };
        if prompt.trim().is_empty() {
            return Err(Error::ConfigurationMissing("prompt".to_string()));
        }

        debug!("Requesting completion from {} ({})", endpoint, self.config.model);

        let request = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        info!("Text generation status: {}", status.as_u16());

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::UpstreamError {
                service: Upstream::TextGeneration,
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            Error::MalformedResponse(format!("text generation payload: {}", e))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                Error::MalformedResponse("text generation returned no choices".to_string())
            })
    }
}
