//! Linear text-to-audio pipeline
//!
//! A request moves `Start -> GeneratingText -> SynthesizingAudio -> Done`.
//! Any failure ends the request with that error; later stages never run.

use std::fmt;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::Result;
use crate::generation::TextGenerator;
use crate::synthesis::{AudioPayload, SpeechSynthesizer};

/// Pipeline stage for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    GeneratingText,
    SynthesizingAudio,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::GeneratingText => "generating_text",
            Stage::SynthesizingAudio => "synthesizing_audio",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Generates text from the configured prompt and speaks it
pub struct Pipeline {
    prompt: String,
    generator: TextGenerator,
    synthesizer: SpeechSynthesizer,
}

impl Pipeline {
    pub fn new(prompt: String, generator: TextGenerator, synthesizer: SpeechSynthesizer) -> Self {
        Self {
            prompt,
            generator,
            synthesizer,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            config.prompt.clone(),
            TextGenerator::new(config.text_generation.clone())?,
            SpeechSynthesizer::new(config.speech_synthesis.clone())?,
        ))
    }

    pub async fn run(&self) -> Result<AudioPayload> {
        let mut stage = Stage::Start;
        debug!("Pipeline stage: {}", stage);

        stage = Stage::GeneratingText;
        debug!("Pipeline stage: {}", stage);
        let text = self.generator.generate(&self.prompt).await.map_err(|e| {
            debug!("Pipeline failed during {}: {}", stage, e);
            e
        })?;

        stage = Stage::SynthesizingAudio;
        debug!("Pipeline stage: {} ({} chars)", stage, text.len());
        let audio = self.synthesizer.synthesize(&text).await.map_err(|e| {
            debug!("Pipeline failed during {}: {}", stage, e);
            e
        })?;

        stage = Stage::Done;
        debug!("Pipeline stage: {} ({} bytes)", stage, audio.bytes.len());
        Ok(audio)
    }
}
