use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("The model returned no text (finish reason: {0})")]
    EmptyResponse(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
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
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Gemini `generateContent` client
///
/// One prompt in, one block of text out. Nothing is retried.
pub struct GeminiClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// `timeout` of `None` leaves the request unbounded.
    pub fn new(
        endpoint: String,
        api_key: String,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<Self, GeminiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint,
            api_key,
            model,
            client: builder.build()?,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }

    /// Send a single prompt and return the generated text
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!("Sending generateContent request (model: {}, prompt: {} chars)", self.model, prompt.len());

        let response = self.client.post(self.build_url()).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!("Gemini API returned {}", status);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: extract_error_message(&text),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GeminiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: error.message,
            });
        }

        extract_text(parsed)
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| GeminiError::EmptyResponse("no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(GeminiError::EmptyResponse(reason));
    }

    Ok(text)
}

/// Pull `error.message` out of an API error body, falling back to the raw body
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> GeminiClient {
        GeminiClient::new(
            endpoint.to_string(),
            "secret key".to_string(),
            "gemini-2.5-flash".to_string(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_build_url_encodes_key() {
        let client = client("https://generativelanguage.googleapis.com/v1beta/");
        assert_eq!(
            client.build_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=secret%20key"
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Eat "}, {"text": "well."}]}, "finishReason": "STOP"}]}"#,
        )
        .unwrap();

        assert_eq!(extract_text(response).unwrap(), "Eat well.");
    }

    #[test]
    fn test_extract_text_reports_finish_reason() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();

        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse(ref r) if r == "SAFETY"));
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(extract_error_message(body), "API key not valid.");
        assert_eq!(extract_error_message("upstream down\n"), "upstream down");
    }
}
