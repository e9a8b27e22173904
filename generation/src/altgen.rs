//! Anthropic Messages API client for image description.

use anyhow::Result;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::Value;
use tracing::{debug, info};

use autoalt_core::{AltGenerator, AltTextError};

use crate::mime::media_type_for;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Vision-model client. One instance per command invocation; requests are
/// awaited to completion one at a time by the orchestrator.
pub struct AltGen {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl AltGen {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl AltGenerator for AltGen {
    async fn generate(&self, filename: &str, image: &[u8], prompt: &str) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(AltTextError::MissingApiKey.into());
        }

        let media_type = media_type_for(filename);
        info!(filename, media_type, model = %self.model, "Requesting image description");

        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "image",
                      "source": {
                          "type": "base64",
                          "media_type": media_type,
                          "data": STANDARD.encode(image),
                      } },
                    { "type": "text", "text": prompt }
                ]
            }],
        });

        let resp = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(AltTextError::Provider {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let json: Value = resp.json().await?;
        let description = collect_text_blocks(&json).ok_or_else(|| {
            AltTextError::MalformedResponse("response has no content array".into())
        })?;
        debug!(filename, chars = description.len(), "Received description");
        Ok(description)
    }
}

/// Concatenate the text of all `type == "text"` content blocks, joined by
/// a blank line. Non-text blocks are ignored. `None` if the response
/// carries no content array at all.
fn collect_text_blocks(response: &Value) -> Option<String> {
    let blocks = response.get("content")?.as_array()?;
    let texts: Vec<&str> = blocks
        .iter()
        .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|b| b.get("text").and_then(Value::as_str))
        .collect();
    Some(texts.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_text_blocks_with_blank_line() {
        let resp = json!({ "content": [
            { "type": "text", "text": "A cat." },
            { "type": "tool_use", "id": "x", "name": "y", "input": {} },
            { "type": "text", "text": "On a mat." },
        ]});
        assert_eq!(
            collect_text_blocks(&resp).unwrap(),
            "A cat.\n\nOn a mat."
        );
    }

    #[test]
    fn response_without_content_is_malformed() {
        assert!(collect_text_blocks(&json!({ "error": "nope" })).is_none());
    }

    #[test]
    fn only_non_text_blocks_yield_empty_description() {
        let resp = json!({ "content": [ { "type": "thinking", "thinking": "..." } ]});
        assert_eq!(collect_text_blocks(&resp).unwrap(), "");
    }

    #[tokio::test]
    async fn empty_api_key_fails_before_sending() {
        let gen = AltGen::new("", "claude-3-5-sonnet-20240620");
        let err = gen.generate("a.png", b"bytes", "describe").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AltTextError>(),
            Some(AltTextError::MissingApiKey)
        ));
    }
}
