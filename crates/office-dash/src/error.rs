use crate::config::ConfigError;
use crate::dashboard::{FilterParseError, ParseValueError, SnapshotError, TaskImportError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Snapshot(SnapshotError),
    Import(TaskImportError),
    Filter(FilterParseError),
    Selection(ParseValueError),
    NotFound(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Snapshot(err) => write!(f, "snapshot error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Filter(err) => write!(f, "{}", err),
            AppError::Selection(err) => write!(f, "invalid selection: {}", err),
            AppError::NotFound(what) => write!(f, "{} not found", what),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Snapshot(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Filter(err) => Some(err),
            AppError::Selection(err) => Some(err),
            AppError::NotFound(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Filter(_) | AppError::Selection(_) | AppError::Import(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Snapshot(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SnapshotError> for AppError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<TaskImportError> for AppError {
    fn from(value: TaskImportError) -> Self {
        Self::Import(value)
    }
}

impl From<FilterParseError> for AppError {
    fn from(value: FilterParseError) -> Self {
        Self::Filter(value)
    }
}

impl From<ParseValueError> for AppError {
    fn from(value: ParseValueError) -> Self {
        Self::Selection(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::TaskFilter;

    #[test]
    fn filter_errors_map_to_bad_request() {
        let err = TaskFilter::parse(Some("stalled"), None).expect_err("unknown status");
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn error_body_carries_message() {
        let err = TaskFilter::parse(None, Some("urgent")).expect_err("unknown priority");
        let response = AppError::from(err).into_response();
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            payload["error"],
            "invalid filter: unknown task priority 'urgent'"
        );
    }

    #[test]
    fn missing_records_map_to_not_found() {
        let err = AppError::NotFound("profile");
        assert_eq!(err.to_string(), "profile not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn io_errors_map_to_internal_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
