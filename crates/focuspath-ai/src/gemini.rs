//! Gemini client for task classification.
//!
//! Sends one `generateContent` request with a JSON response schema and
//! parses the first candidate's text as the plan.

use async_trait::async_trait;
use focuspath_core::ClassifierSettings;
use focuspath_domain::Plan;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{build_prompt, parse_plan, response_schema, ClassifyError, TaskClassifier};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClassifier {
    client: reqwest::Client,
    settings: ClassifierSettings,
    api_key: String,
}

impl GeminiClassifier {
    pub fn new(settings: ClassifierSettings, api_key: String) -> Result<Self, ClassifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ClassifyError::Network(e.to_string()))?;
        Ok(Self {
            client,
            settings,
            api_key,
        })
    }

    /// Resolve the API key from the environment and build the client.
    pub fn from_settings(settings: &ClassifierSettings) -> Result<Self, ClassifyError> {
        let api_key = settings
            .resolve_api_key()
            .ok_or_else(|| ClassifyError::MissingApiKey(settings.api_key_env_vars().join(" or ")))?;
        Self::new(settings.clone(), api_key)
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.model()
        )
    }

    fn build_request(&self, input: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: build_prompt(input),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.settings.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }

    fn headers(&self) -> Result<HeaderMap, ClassifyError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| ClassifyError::MissingApiKey("a valid API key".to_string()))?;
        headers.insert(API_KEY_HEADER, key);
        Ok(headers)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
    code: Option<u16>,
}

/// Pull the reply text out of a response body.
///
/// The text is the concatenation of the first candidate's text parts.
fn extract_text(status: u16, body: &str) -> Result<String, ClassifyError> {
    let parsed: GeminiResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !(200..300).contains(&status) => {
            return Err(ClassifyError::Api {
                status,
                message: body.trim().to_string(),
            });
        }
        Err(e) => return Err(ClassifyError::Malformed(e.to_string())),
    };

    if let Some(error) = parsed.error {
        return Err(ClassifyError::Api {
            status: error.code.unwrap_or(status),
            message: error.message,
        });
    }
    if !(200..300).contains(&status) {
        return Err(ClassifyError::Api {
            status,
            message: format!("HTTP {}", status),
        });
    }
    if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ClassifyError::Api {
            status,
            message: format!("prompt blocked: {}", reason),
        });
    }

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ClassifyError::EmptyResponse);
    }
    Ok(text)
}

#[async_trait]
impl TaskClassifier for GeminiClassifier {
    async fn classify(&self, input: &str) -> Result<Plan, ClassifyError> {
        let url = self.build_url();
        tracing::debug!(model = self.model(), "Gemini request to {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&self.build_request(input))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("Gemini responded {} ({} bytes)", status, body.len());

        let text = extract_text(status, &body)?;
        parse_plan(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focuspath_domain::Quadrant;

    fn classifier() -> GeminiClassifier {
        let settings = ClassifierSettings {
            model: "gemini-test".to_string(),
            endpoint: "https://example.invalid/v1beta/".to_string(),
            ..Default::default()
        };
        GeminiClassifier::new(settings, "test-key".to_string()).unwrap()
    }

    #[test]
    fn test_build_url_keeps_key_out_of_query() {
        let url = classifier().build_url();
        assert_eq!(
            url,
            "https://example.invalid/v1beta/models/gemini-test:generateContent"
        );
        assert!(!url.contains("test-key"));
    }

    #[test]
    fn test_model_comes_from_settings() {
        assert_eq!(classifier().model(), "gemini-test");
        let defaults =
            GeminiClassifier::new(ClassifierSettings::default(), "k".to_string()).unwrap();
        assert_eq!(defaults.model(), focuspath_core::config::DEFAULT_MODEL);
    }

    #[test]
    fn test_headers_carry_api_key() {
        let headers = classifier().headers().unwrap();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "test-key");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(classifier().build_request("Buy milk")).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert!(body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Buy milk"));
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        assert!((config["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"tasks\":"},{"text":"[]}"}]}}]}"#;
        assert_eq!(extract_text(200, body).unwrap(), r#"{"tasks":[]}"#);
    }

    #[test]
    fn test_extract_text_errors() {
        let error_body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        match extract_text(403, error_body) {
            Err(ClassifyError::Api { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected Api error, got {:?}", other),
        }

        assert!(matches!(
            extract_text(502, "Bad Gateway"),
            Err(ClassifyError::Api { status: 502, .. })
        ));
        assert!(matches!(
            extract_text(200, r#"{"candidates":[]}"#),
            Err(ClassifyError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(200, r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#),
            Err(ClassifyError::Api { .. })
        ));
        assert!(matches!(
            extract_text(200, "<html>"),
            Err(ClassifyError::Malformed(_))
        ));
    }

    #[test]
    fn test_reply_parses_into_plan() {
        let reply = serde_json::json!({
            "tasks": [{
                "title": "Finish report",
                "quadrant": "DO_FIRST",
                "urgencyScore": 9,
                "importanceScore": 8,
                "reasoning": "Due Friday",
                "estimatedTime": "3 hours"
            }],
            "executiveSummary": "One deadline.",
            "topPriority": "Finish report"
        })
        .to_string();
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": reply }] } }]
        })
        .to_string();

        let plan = parse_plan(&extract_text(200, &body).unwrap()).unwrap();
        assert_eq!(plan.tasks[0].quadrant, Quadrant::DoFirst);
        assert_eq!(plan.top_priority, "Finish report");
    }
}
