//! Chat-completion client
//!
//! One blocking request per run. The response is constrained with a strict
//! JSON schema so the model can only answer with the two generated files;
//! anything else is rejected before a single byte lands on disk.

use serde::{Deserialize, Serialize};

use crate::error::{McpgenError, Result};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// The two generated files the model is constrained to return
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GenerationResult {
    #[serde(rename = "package.json")]
    pub package_json: String,
    #[serde(rename = "index.ts")]
    pub index_ts: String,
}

/// Client for the chat-completion API
pub struct ModelClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error envelope returned by the API on non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl ModelClient {
    /// Create a client against the public API endpoint
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(OPENAI_API_BASE, api_key, model)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Send the assembled prompt and return the validated two-file result.
    /// Transport failures, non-success statuses, and schema mismatches are
    /// all fatal; there is no retry or repair.
    pub fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: "output",
                    strict: true,
                    schema: output_schema(),
                },
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| McpgenError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| McpgenError::RequestFailed {
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| body.trim().to_string());
            return Err(McpgenError::ApiRejected {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ChatResponse =
            serde_json::from_str(&body).map_err(|e| McpgenError::InvalidResponse {
                reason: format!("malformed response body: {}", e),
            })?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| McpgenError::InvalidResponse {
                reason: "response contained no message content".to_string(),
            })?;

        parse_generation(&content)
    }
}

/// Parse the model's message content into a validated [`GenerationResult`]
fn parse_generation(content: &str) -> Result<GenerationResult> {
    serde_json::from_str(content).map_err(|e| McpgenError::InvalidResponse {
        reason: format!("model output did not match the expected schema: {}", e),
    })
}

/// JSON schema with exactly the two required string fields
fn output_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "package.json": { "type": "string" },
            "index.ts": { "type": "string" }
        },
        "required": ["package.json", "index.ts"],
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_schema_requires_both_fields() {
        let schema = output_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
        assert!(required.contains(&serde_json::json!("package.json")));
        assert!(required.contains(&serde_json::json!("index.ts")));
        assert_eq!(schema["additionalProperties"], serde_json::json!(false));
    }

    #[test]
    fn test_request_serializes_with_json_schema_format() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![Message {
                role: "user",
                content: "hello",
            }],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: "output",
                    strict: true,
                    schema: output_schema(),
                },
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["response_format"]["type"], "json_schema");
        assert_eq!(value["response_format"]["json_schema"]["strict"], true);
    }

    #[test]
    fn test_parse_generation_accepts_valid_result() {
        let result =
            parse_generation(r#"{"package.json": "{}", "index.ts": "// stub"}"#).unwrap();
        assert_eq!(result.package_json, "{}");
        assert_eq!(result.index_ts, "// stub");
    }

    #[test]
    fn test_parse_generation_rejects_missing_field() {
        let result = parse_generation(r#"{"package.json": "{}"}"#);
        assert!(matches!(
            result.unwrap_err(),
            McpgenError::InvalidResponse { .. }
        ));
    }

    #[test]
    fn test_parse_generation_rejects_non_string_field() {
        let result = parse_generation(r#"{"package.json": "{}", "index.ts": 42}"#);
        assert!(matches!(
            result.unwrap_err(),
            McpgenError::InvalidResponse { .. }
        ));
    }

    #[test]
    fn test_parse_generation_rejects_non_json() {
        let result = parse_generation("not json at all");
        assert!(matches!(
            result.unwrap_err(),
            McpgenError::InvalidResponse { .. }
        ));
    }
}
