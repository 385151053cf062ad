//! HTTP client for the Assistant Service.
//!
//! Exactly two calls: a chat completion and a file analysis. The client does
//! not inspect HTTP status codes; an error body that fails to deserialize
//! surfaces as an `Err` the same way a transport failure does, and callers
//! treat both identically.

use serde::{Deserialize, Serialize};

/// The backend runs on a fixed local origin.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisReply {
    pub summary: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Sends the just-typed text as a single-element conversation and returns
    /// the assistant's reply.
    pub async fn chat(&self, text: &str) -> anyhow::Result<ChatReply> {
        let body = ChatRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: text.to_string(),
            }],
        };
        let reply = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        Ok(reply)
    }

    /// Uploads a file for analysis, preserving its original filename in the
    /// multipart `file` field.
    pub async fn analyze(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<AnalysisReply> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let reply = self
            .http
            .post(format!("{}/api/analyze", self.base_url))
            .multipart(form)
            .send()
            .await?
            .json()
            .await?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_matches_the_wire_shape() {
        let body = ChatRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({ "messages": [{ "role": "user", "content": "hello" }] })
        );
    }

    #[test]
    fn chat_reply_takes_only_the_content_field() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"content": "Hi", "role": "assistant", "model": "gpt-4"}"#)
                .unwrap();
        assert_eq!(reply.content, "Hi");
    }

    #[test]
    fn analysis_reply_summary_is_optional() {
        let with: AnalysisReply =
            serde_json::from_str(r#"{"summary": "Report of 3 pages"}"#).unwrap();
        assert_eq!(with.summary.as_deref(), Some("Report of 3 pages"));

        let without: AnalysisReply = serde_json::from_str(r#"{"filename": "a.pdf"}"#).unwrap();
        assert!(without.summary.is_none());
    }
}
