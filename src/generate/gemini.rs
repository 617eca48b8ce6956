//! Client for the Generative Language `generateContent` endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Generator;
use crate::error::GenerateError;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config: GeminiConfig {
                api_base: config.api_base.trim_end_matches('/').to_string(),
                ..config
            },
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }
}

impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GenerateError::MissingApiKey)?;

        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "requesting generation");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateRequest::new(prompt))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status,
                message: api_error_message(&body),
            });
        }

        let response: GenerateResponse = resp.json().await?;
        response.into_text()
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateResponse {
    /// Text parts of the first candidate, joined and trimmed.
    fn into_text(self) -> Result<String, GenerateError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(GenerateError::EmptyResponse(reason));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        let text = text.trim();
        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "empty candidate".to_string());
            return Err(GenerateError::EmptyResponse(reason));
        }

        Ok(text.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let json = serde_json::to_value(GenerateRequest::new("hello")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "Q: a\n" }, { "text": "A: b\n" }], "role": "model" },
                  "finishReason": "STOP" },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_text().unwrap(), "Q: a\nA: b");
    }

    #[test]
    fn blocked_prompt_reports_reason() {
        let body = r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        match response.into_text() {
            Err(GenerateError::EmptyResponse(reason)) => assert_eq!(reason, "SAFETY"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_candidate_reports_finish_reason() {
        let body = r#"{ "candidates": [{ "finishReason": "MAX_TOKENS" }] }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            response.into_text(),
            Err(GenerateError::EmptyResponse(reason)) if reason == "MAX_TOKENS"
        ));
    }

    #[test]
    fn api_error_message_prefers_json_message() {
        let body = r#"{ "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" } }"#;
        assert_eq!(api_error_message(body), "API key not valid.");
        assert_eq!(api_error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(GeminiConfig {
            api_base: "http://localhost:8080/".to_string(),
            ..GeminiConfig::default()
        });
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = GeminiClient::new(GeminiConfig::default());
        assert!(matches!(
            client.generate("hi").await,
            Err(GenerateError::MissingApiKey)
        ));
    }
}
