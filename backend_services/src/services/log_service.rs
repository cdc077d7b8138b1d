use std::collections::BTreeMap;

use chrono::NaiveDate;
use dashboard_core::query_date;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::ServiceError;

/// Client for the voice-log API (`GET /log?date=YYYYMMDD`).
#[derive(Clone)]
pub struct LogClient {
    http: Client,
    endpoint: String,
}

impl LogClient {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Fetches every log file recorded on `date` as `file name -> content`.
    ///
    /// One request, no retry. Content that is not a string is kept as its
    /// JSON text, and `null` becomes an empty (skipped) entry.
    pub async fn fetch(&self, date: NaiveDate) -> Result<BTreeMap<String, String>, ServiceError> {
        let date_param = query_date(date);
        debug!(target: "log_client", endpoint = %self.endpoint, date = %date_param, "GET logs");

        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("date", date_param.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(target: "log_client", %status, body = %body, "Log API error");
            return Err(ServiceError::UpstreamStatus { status, body });
        }

        let text = resp.text().await?;
        let raw: BTreeMap<String, Value> = serde_json::from_str(&text)
            .map_err(|e| ServiceError::InvalidResponse(format!("log API body: {e}")))?;

        Ok(raw
            .into_iter()
            .map(|(name, content)| {
                let content = match content {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (name, content)
            })
            .collect())
    }
}
