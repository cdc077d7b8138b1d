use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{Local, NaiveDate};
use dashboard_core::{snapshot, CompletionRequest, LogView, SensorSnapshot, PERSONA};
use tracing::{info, warn};

use crate::{
    app::AppState,
    services::ServiceError,
    types::{ChatReply, ChatRequest, ErrorResponse, LogQuery},
};

pub async fn health() -> &'static str {
    "ok"
}

/// Mock readings, regenerated on every call.
pub async fn get_sensors() -> Result<Json<SensorSnapshot>, Response> {
    snapshot(Local::now().naive_local()).map(Json).map_err(|e| {
        warn!(target: "sensors", error = %e, "Sensor data generation failed");
        create_error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
    })
}

/// Logs for one day, already rendered into chat bubbles.
///
/// A failed upstream fetch still answers 200: the view carries the error
/// and an empty batch, so the page shows both the error and "no logs".
pub async fn get_logs(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogView>, Response> {
    let date = parse_date(&query.date).ok_or_else(|| {
        create_error_response(
            StatusCode::BAD_REQUEST,
            &format!("Invalid date '{}', expected YYYY-MM-DD", query.date),
        )
    })?;

    let view = match state.logs.fetch(date).await {
        Ok(batch) => LogView::from_batch(date, batch),
        Err(e) => {
            warn!(target: "logs", %date, error = %e, "Failed to fetch logs");
            LogView::fetch_failed(date, format!("Failed to fetch logs: {e}"))
        }
    };

    info!(
        target: "logs",
        %date,
        received = view.received,
        warnings = view.warnings().count(),
        "Rendered log view"
    );
    Ok(Json(view))
}

/// One chat turn: the client sends its transcript ending in the new user
/// message and receives the assistant's reply.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, Response> {
    let completion = CompletionRequest::build(PERSONA, &request.messages)
        .map_err(|e| into_response(ServiceError::InvalidInput(e.to_string())))?;

    match state.chat.complete(&completion).await {
        Ok(reply) => {
            info!(target: "chat", turns = request.messages.len(), "Chat reply received");
            Ok(Json(ChatReply { reply }))
        }
        Err(e) => {
            warn!(target: "chat", error = %e, "Chat completion failed");
            Err(into_response(e))
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .ok()
}

fn into_response(err: ServiceError) -> Response {
    create_error_response(err.status(), &err.to_string())
}

fn create_error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(parse_date("2024-05-01"), expected);
        assert_eq!(parse_date("20240501"), expected);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("yesterday"), None);
    }
}
