//! Text-to-speech generation endpoint

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Generate text from the configured prompt and return it as spoken audio
pub async fn generate_tts(State(state): State<AppState>) -> Result<Response, ApiError> {
    let request_id = Uuid::new_v4();

    async move {
        info!("TTS generation requested");

        let audio = state.pipeline.run().await.map_err(|e| {
            warn!("TTS generation failed: {}", e);
            ApiError::from(e)
        })?;

        info!(
            "Returning {} bytes of {}",
            audio.bytes.len(),
            audio.content_type
        );
        Ok(([(header::CONTENT_TYPE, audio.content_type)], audio.bytes).into_response())
    }
    .instrument(info_span!("generate_tts", %request_id))
    .await
}
