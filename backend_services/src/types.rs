use dashboard_core::ChatMessage;

#[derive(serde::Deserialize)]
pub struct LogQuery {
    /// `YYYY-MM-DD` (the date picker's format) or `YYYYMMDD`.
    pub date: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
