use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    /// Base URL of the voice-log API; `/log` is appended per request.
    pub log_api_url: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub chat_model: String,
    pub chat_temperature: f32,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            log_api_url: "http://113.198.63.27:10150".to_string(),
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o".to_string(),
            chat_temperature: 0.8,
            static_dir: "dist".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            log_api_url: std::env::var("LOG_API_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.log_api_url),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.openai_base_url),
            chat_model: std::env::var("CHAT_MODEL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.chat_model),
            chat_temperature: std::env::var("CHAT_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .unwrap_or(defaults.chat_temperature),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }

    pub fn log_endpoint(&self) -> String {
        format!("{}/log", self.log_api_url.trim_end_matches('/'))
    }

    pub fn chat_endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.openai_base_url.trim_end_matches('/')
        )
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }
}
