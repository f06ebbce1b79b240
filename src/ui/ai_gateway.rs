//! Browser-side calls to the AI proxy
//!
//! Both calls go through the server (`/api/ai/*`) so the API key never
//! reaches the browser. Each request is raced against
//! [`REQUEST_TIMEOUT_MS`]; on the server build they always fail because
//! rendering never issues AI calls.

use crate::core::ai::{AiErrorBody, AiReply, AskRequest, SummarizeRequest};
#[cfg(feature = "hydrate")]
use crate::core::ai::{ASK_ENDPOINT, SUMMARIZE_ENDPOINT};

/// Client-side upper bound, a little above the server's own timeout
pub const REQUEST_TIMEOUT_MS: u32 = 35_000;

/// Summarize recent chat lines
pub async fn summarize(lines: Vec<String>) -> Result<String, String> {
    let request = SummarizeRequest { messages: lines };
    post_reply(Endpoint::Summarize, &serde_json::to_value(&request).map_err(|e| e.to_string())?)
        .await
}

/// Ask the expert model a question with free-text context
pub async fn ask_expert(question: String, context: String) -> Result<String, String> {
    let request = AskRequest { question, context };
    post_reply(Endpoint::Ask, &serde_json::to_value(&request).map_err(|e| e.to_string())?).await
}

#[derive(Clone, Copy, Debug)]
enum Endpoint {
    Summarize,
    Ask,
}

/// Human readable message for a failed proxy response
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn error_message(status: u16, body: Option<AiErrorBody>) -> String {
    match body {
        Some(body) => format!("AI error {}: {}", body.code, body.error),
        None => format!("AI error {}", status),
    }
}

/// Trimmed reply text. A blank reply is a successful call with nothing to
/// say, not a connection failure.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn reply_text(reply: AiReply) -> String {
    reply.text.trim().to_string()
}

#[cfg(feature = "hydrate")]
async fn post_reply(endpoint: Endpoint, body: &serde_json::Value) -> Result<String, String> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;

    let url = match endpoint {
        Endpoint::Summarize => SUMMARIZE_ENDPOINT,
        Endpoint::Ask => ASK_ENDPOINT,
    };

    let fetch = async move {
        let resp = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| format!("Failed to serialize: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Fetch failed: {}", e))?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<AiErrorBody>().await.ok();
            return Err(error_message(status, body));
        }

        let reply = resp
            .json::<AiReply>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;
        Ok(reply_text(reply))
    };

    match select(Box::pin(fetch), TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            leptos::logging::warn!("AI request to {} timed out", url);
            Err("AI request timed out".to_string())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
async fn post_reply(endpoint: Endpoint, _body: &serde_json::Value) -> Result<String, String> {
    Err(format!("{:?} is only available in the browser", endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ai::{
        AiChatSession, ClassAssistant, EMPTY_ANSWER_FALLBACK, NoteKind, TUTOR_FALLBACK,
    };

    #[test]
    fn test_error_message_prefers_body() {
        let body = AiErrorBody {
            error: "AI request timed out".to_string(),
            code: 504,
        };
        assert_eq!(error_message(504, Some(body)), "AI error 504: AI request timed out");
        assert_eq!(error_message(502, None), "AI error 502");
    }

    #[test]
    fn test_reply_text_is_trimmed() {
        let reply = AiReply {
            text: "1. Forces\n".to_string(),
        };
        assert_eq!(reply_text(reply), "1. Forces");
    }

    #[test]
    fn test_blank_reply_shows_empty_answer_text() {
        let mut session = AiChatSession::new("hi");
        session.begin("What is torque?").unwrap();
        let blank = AiReply {
            text: "   ".to_string(),
        };
        session.finish(Ok(reply_text(blank)));

        let last = session.transcript().last().unwrap();
        assert_eq!(last.text, EMPTY_ANSWER_FALLBACK);
        assert_ne!(last.text, TUTOR_FALLBACK);

        let mut panel = ClassAssistant::default();
        panel.begin();
        panel.finish(
            NoteKind::Answer,
            Ok(reply_text(AiReply {
                text: String::new(),
            })),
        );
        assert_eq!(panel.note().map(|n| n.text.as_str()), Some(EMPTY_ANSWER_FALLBACK));
    }

    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    #[tokio::test]
    async fn test_server_build_never_calls_out() {
        assert!(summarize(vec!["Rahul V.: hi".to_string()]).await.is_err());
        assert!(ask_expert("What is work?".to_string(), String::new()).await.is_err());
    }
}
