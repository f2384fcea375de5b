//! HTTP routes

mod page;
mod tts;

use axum::{routing::get, Router};
use speakeasy_core::ServerConfig;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/", get(page::index))
        .route("/generate-tts", get(tts::generate_tts))
        .layer(TraceLayer::new_for_http());

    let router = if config.cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use mockito::{Matcher, Server};
    use speakeasy_core::{AppConfig, Pipeline, SpeechSynthesisConfig, TextGenerationConfig};
    use tower::ServiceExt;

    const MP3_BYTES: &[u8] = &[0xFF, 0xFB, 0x90, 0x44, 0x00, 0x0F];

    fn app_with(config: AppConfig) -> Router {
        let pipeline = Pipeline::from_config(&config).unwrap();
        create_router(AppState::new(pipeline), &config.server)
    }

    fn mocked_config(server: &Server) -> AppConfig {
        AppConfig {
            prompt: "say hi".to_string(),
            text_generation: TextGenerationConfig {
                endpoint: Some(format!("{}/chat", server.url())),
                api_key: Some("xai".to_string()),
                ..Default::default()
            },
            speech_synthesis: SpeechSynthesisConfig {
                base_url: server.url(),
                api_key: Some("el".to_string()),
                voice_id: Some("voice-1".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_index_served_without_configuration() {
        let response = send_get(app_with(AppConfig::default()), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        assert_eq!(body_bytes(response).await, page::INDEX_HTML.as_bytes());
    }

    #[tokio::test]
    async fn test_cors_headers_only_when_enabled() {
        let request = || {
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap()
        };

        let cors_config = AppConfig {
            server: ServerConfig {
                cors_enabled: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let response = app_with(cors_config).oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

        let response = app_with(AppConfig::default())
            .oneshot(request())
            .await
            .unwrap();
        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_generate_tts_returns_audio() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#)
            .create_async()
            .await;
        let tts = server
            .mock("POST", "/text-to-speech/voice-1")
            .match_body(Matcher::PartialJson(serde_json::json!({"text": "hi"})))
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(MP3_BYTES)
            .create_async()
            .await;

        let response = send_get(app_with(mocked_config(&server)), "/generate-tts").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
        assert_eq!(body_bytes(response).await, MP3_BYTES);
        tts.assert_async().await;
    }

    #[tokio::test]
    async fn test_generation_failure_is_500_and_skips_synthesis() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(500)
            .with_body("model exploded")
            .create_async()
            .await;
        let tts = server
            .mock("POST", Matcher::Regex("^/text-to-speech/".to_string()))
            .expect(0)
            .create_async()
            .await;

        let response = send_get(app_with(mocked_config(&server)), "/generate-tts").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("500"));
        assert!(body.contains("model exploded"));
        tts.assert_async().await;
    }

    #[tokio::test]
    async fn test_synthesis_failure_is_500() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/text-to-speech/voice-1")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let response = send_get(app_with(mocked_config(&server)), "/generate-tts").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("401"));
    }

    #[tokio::test]
    async fn test_missing_configuration_is_500() {
        let response = send_get(app_with(AppConfig::default()), "/generate-tts").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("Configuration missing"));
    }
}
