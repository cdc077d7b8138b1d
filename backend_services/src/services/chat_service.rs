use dashboard_core::CompletionRequest;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, error};

use super::ServiceError;

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct ChatClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl ChatClient {
    pub fn new(
        http: Client,
        endpoint: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key,
            model: model.into(),
            temperature,
        }
    }

    /// Sends the whole request and waits for the single, complete reply.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ServiceError::Unavailable("chat assistant is not configured (OPENAI_API_KEY)".into())
        })?;

        debug!(
            target: "chat_client",
            endpoint = %self.endpoint,
            model = %self.model,
            messages = request.messages.len(),
            "POST chat completion"
        );

        let body = json!({
            "model": self.model,
            "messages": request.messages,
            "temperature": self.temperature,
        });

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!(target: "chat_client", %status, body = %text, "Chat completion error");
            return Err(ServiceError::UpstreamStatus { status, body: text });
        }

        let val: serde_json::Value = resp.json().await?;
        extract_reply(&val).ok_or_else(|| {
            ServiceError::InvalidResponse("missing choices[0].message.content".into())
        })
    }
}

fn extract_reply(v: &serde_json::Value) -> Option<String> {
    v.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reply() {
        let v = json!({"choices": [{"message": {"role": "assistant", "content": "Water at dawn."}}]});
        assert_eq!(extract_reply(&v).as_deref(), Some("Water at dawn."));
        assert_eq!(extract_reply(&json!({"choices": []})), None);
        assert_eq!(extract_reply(&json!({"error": {"message": "bad key"}})), None);
    }
}
