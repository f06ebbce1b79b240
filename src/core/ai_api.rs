//! AI API server-side handler
//!
//! Server-side proxy for the two AI tutor calls. The API key stays on the
//! server; the browser only ever talks to `/api/ai/*`. Each upstream call is
//! one `generateContent` request with an enforced timeout and no retries.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::ai::{
    ASK_ENDPOINT, AiErrorBody, AiReply, AskRequest, NO_MESSAGES_REPLY, SUMMARIZE_ENDPOINT,
    SummarizeRequest, ask_prompt, summarize_prompt,
};

/// Settings for the AI proxy
#[derive(Clone)]
pub struct AiGatewayConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub summary_model: String,
    pub expert_model: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for AiGatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiGatewayConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("summary_model", &self.summary_model)
            .field("expert_model", &self.expert_model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// AI proxy error types
#[derive(Debug, thiserror::Error)]
pub enum AiGatewayError {
    #[error("No API key configured. Set GEMINI_API_KEY in .env")]
    MissingApiKey,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("AI request timed out")]
    Timeout,

    #[error("Failed to connect to AI API: {0}")]
    Transport(String),

    #[error("AI API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to decode AI API response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for AiGatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AiGatewayError::Timeout
        } else if err.is_decode() {
            AiGatewayError::Decode(err.to_string())
        } else {
            AiGatewayError::Transport(err.to_string())
        }
    }
}

impl AiGatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            AiGatewayError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            AiGatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AiGatewayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AiGatewayError::Transport(_)
            | AiGatewayError::Upstream { .. }
            | AiGatewayError::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AiGatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = AiErrorBody {
            error: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// generateContent wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Reply text for the browser; a blank answer is passed on as empty so
    /// the client can tell it apart from a failed call
    fn into_reply_text(self) -> String {
        self.text().unwrap_or_else(|| {
            tracing::warn!("AI API returned no text");
            String::new()
        })
    }
}

const SUMMARY_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    top_p: Some(0.9),
};

const EXPERT_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.3,
    top_p: None,
};

/// Thin client for the generative language REST API
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: AiGatewayConfig,
}

impl GeminiClient {
    pub fn new(config: AiGatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Three-takeaway summary of recent chat lines
    pub async fn summarize(&self, lines: &[String]) -> Result<String, AiGatewayError> {
        if lines.is_empty() {
            return Ok(NO_MESSAGES_REPLY.to_string());
        }
        self.generate(
            &self.config.summary_model,
            &summarize_prompt(lines),
            SUMMARY_GENERATION,
        )
        .await
    }

    /// Direct answer to a student question given free-text context
    pub async fn ask_expert(&self, question: &str, context: &str) -> Result<String, AiGatewayError> {
        if question.trim().is_empty() {
            return Err(AiGatewayError::InvalidRequest(
                "question must not be empty".to_string(),
            ));
        }
        self.generate(
            &self.config.expert_model,
            &ask_prompt(question.trim(), context),
            EXPERT_GENERATION,
        )
        .await
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        generation_config: GenerationConfig,
    ) -> Result<String, AiGatewayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AiGatewayError::MissingApiKey)?;

        let url = format!("{}/models/{}:generateContent", self.config.api_base, model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config,
        };

        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        tracing::info!("AI API response status: {} (model={})", status, model);

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!("AI API error response: {}", truncate(&body, 500));
            return Err(AiGatewayError::Upstream {
                status: status.as_u16(),
                body: truncate(&body, 500),
            });
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        Ok(parsed.into_reply_text())
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, total {} bytes)", &text[..end], text.len())
}

/// Create the AI API router
pub fn ai_api_router(config: AiGatewayConfig) -> Router {
    let state = Arc::new(GeminiClient::new(config));

    Router::new()
        .route(SUMMARIZE_ENDPOINT, post(summarize_handler))
        .route(ASK_ENDPOINT, post(ask_handler))
        .with_state(state)
}

async fn summarize_handler(
    State(client): State<Arc<GeminiClient>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<AiReply>, AiGatewayError> {
    tracing::info!("AI summarize request: messages_count={}", request.messages.len());

    let text = client.summarize(&request.messages).await.inspect_err(|e| {
        tracing::error!("AI summarize failed: {}", e);
    })?;
    Ok(Json(AiReply { text }))
}

async fn ask_handler(
    State(client): State<Arc<GeminiClient>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AiReply>, AiGatewayError> {
    tracing::info!(
        "AI ask request: question_len={}, context_len={}",
        request.question.len(),
        request.context.len()
    );

    let text = client
        .ask_expert(&request.question, &request.context)
        .await
        .inspect_err(|e| {
            tracing::error!("AI ask failed: {}", e);
        })?;
    Ok(Json(AiReply { text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> AiGatewayConfig {
        AiGatewayConfig {
            // Unroutable address; tests below must never reach the network
            api_base: "http://127.0.0.1:9".to_string(),
            api_key: api_key.map(str::to_string),
            summary_model: "flash".to_string(),
            expert_model: "pro".to_string(),
            timeout: Duration::from_millis(200),
        }
    }

    #[tokio::test]
    async fn test_summarize_empty_short_circuits() {
        let client = GeminiClient::new(config(None));
        let text = client.summarize(&[]).await.unwrap();
        assert_eq!(text, NO_MESSAGES_REPLY);
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = GeminiClient::new(config(None));
        let err = client
            .summarize(&["Rahul: lag".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, AiGatewayError::MissingApiKey));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let client = GeminiClient::new(config(Some("key")));
        let err = client.ask_expert("   ", "ctx").await.unwrap_err();
        assert!(matches!(err, AiGatewayError::InvalidRequest(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            generation_config: SUMMARY_GENERATION,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["topP"].as_f64().map(|v| v as f32), Some(0.9));

        let expert = serde_json::to_value(EXPERT_GENERATION).unwrap();
        assert!(expert.get("topP").is_none());
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"1. Kinematics"},{"text":"\n2. Forces"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.text().as_deref(), Some("1. Kinematics\n2. Forces"));
    }

    #[test]
    fn test_response_without_text() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#).unwrap();
        assert!(parsed.text().is_none());
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.text().is_none());
    }

    #[test]
    fn test_blank_answer_becomes_empty_reply() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#)
                .unwrap();
        assert_eq!(parsed.into_reply_text(), "");

        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Work is force times distance."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_reply_text(), "Work is force times distance.");
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(AiGatewayError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            AiGatewayError::Decode("eof".to_string()).status(),
            StatusCode::BAD_GATEWAY
        );
        let upstream = AiGatewayError::Upstream {
            status: 429,
            body: "quota".to_string(),
        };
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
        assert!(upstream.to_string().contains("429"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "π".repeat(10);
        let out = truncate(&text, 5);
        assert!(out.starts_with("ππ"));
        assert!(out.contains("total 20 bytes"));
        assert_eq!(truncate("short", 10), "short");
    }
}
