//! Cohere chat API wire types
//!
//! Request/response models for the v2 `/chat` endpoint and the pure
//! transformations between them and plain prompt/reply strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the chat endpoint, relative to the API base URL.
pub const CHAT_PATH: &str = "/v2/chat";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CohereError {
    #[error("empty reply (finish reason: {0})")]
    EmptyReply(String),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Constrains the reply to a JSON object matching `json_schema`.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
    pub json_schema: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub finish_reason: Option<String>,
    pub message: AssistantMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Build a single-turn chat request, optionally constrained to `schema`.
pub fn chat_request(
    model: &str,
    prompt: &str,
    temperature: f32,
    schema: Option<Value>,
) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature,
        response_format: schema.map(|json_schema| ResponseFormat {
            kind: "json_object".to_string(),
            json_schema,
        }),
    }
}

/// Concatenate the text blocks of a chat reply.
pub fn reply_text(response: ChatResponse) -> Result<String, CohereError> {
    let text = response
        .message
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(CohereError::EmptyReply(
            response.finish_reason.unwrap_or_else(|| "unknown".to_string()),
        ));
    }

    Ok(text)
}

/// Map a non-2xx response to an error, preferring the API's own message.
pub fn api_error(status: u16, body: &str) -> CohereError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|err| err.message)
        .unwrap_or_else(|_| body.trim().to_string());

    CohereError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_request_omits_response_format() {
        let request = chat_request("command-r", "hello", 0.7, None);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "command-r");
        assert_eq!(value["messages"], json!([{"role": "user", "content": "hello"}]));
        assert!(value.get("response_format").is_none());
    }

    #[test]
    fn test_structured_request_carries_schema() {
        let schema = json!({"type": "object"});
        let request = chat_request("command-r", "hello", 0.7, Some(schema.clone()));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["response_format"]["json_schema"], schema);
    }

    #[test]
    fn test_reply_text_joins_text_blocks() {
        let response: ChatResponse = serde_json::from_value(json!({
            "id": "abc",
            "finish_reason": "COMPLETE",
            "message": {
                "role": "assistant",
                "content": [
                    {"type": "text", "text": "Hello, "},
                    {"type": "thinking", "thinking": "..."},
                    {"type": "text", "text": "world"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(reply_text(response).unwrap(), "Hello, world");
    }

    #[test]
    fn test_reply_text_rejects_empty_reply() {
        let response: ChatResponse = serde_json::from_value(json!({
            "finish_reason": "MAX_TOKENS",
            "message": {"role": "assistant", "content": []}
        }))
        .unwrap();

        assert_eq!(
            reply_text(response),
            Err(CohereError::EmptyReply("MAX_TOKENS".to_string()))
        );
    }

    #[test]
    fn test_api_error_prefers_message_field() {
        let err = api_error(401, r#"{"message": "invalid api token"}"#);
        assert_eq!(err.to_string(), "HTTP 401: invalid api token");

        let err = api_error(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }
}
