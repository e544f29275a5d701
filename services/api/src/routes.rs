use crate::infra::AppState;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use office_dash::dashboard::report::views::{
    BottleneckSummary, DepartmentSummary, OverviewSummary, ProfileView, StaffCardView,
    TaskBoardSummary,
};
use office_dash::dashboard::{ProfileSettings, ReportingPeriod, TaskFilter};
use office_dash::error::AppError;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OverviewQuery {
    #[serde(default)]
    pub(crate) period: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TaskQuery {
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[serde(default)]
    pub(crate) priority: Option<String>,
    #[serde(default)]
    pub(crate) assignee_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProfileQuery {
    #[serde(default)]
    pub(crate) notifications: Option<bool>,
    #[serde(default)]
    pub(crate) dark_mode: Option<bool>,
}

pub(crate) fn dashboard_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard", get(overview_endpoint))
        .route("/api/v1/tasks", get(tasks_endpoint))
        .route("/api/v1/departments", get(departments_endpoint))
        .route(
            "/api/v1/departments/bottlenecks",
            get(bottlenecks_endpoint),
        )
        .route("/api/v1/staff", get(staff_endpoint))
        .route("/api/v1/profile", get(profile_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn overview_endpoint(
    State(state): State<AppState>,
    Query(query): Query<OverviewQuery>,
) -> Result<Json<OverviewSummary>, AppError> {
    let period = match query.period.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.parse::<ReportingPeriod>()?,
        _ => ReportingPeriod::default(),
    };

    Ok(Json(state.snapshot.report().overview(period)))
}

pub(crate) async fn tasks_endpoint(
    State(state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> Result<Json<TaskBoardSummary>, AppError> {
    let filter = TaskFilter::parse(query.status.as_deref(), query.priority.as_deref())?;
    debug!(?filter, assignee_id = ?query.assignee_id, "task board requested");

    let board = state
        .snapshot
        .report()
        .task_board(filter, query.assignee_id.as_deref());
    Ok(Json(board))
}

pub(crate) async fn departments_endpoint(
    State(state): State<AppState>,
) -> Json<DepartmentSummary> {
    Json(state.snapshot.report().departments())
}

pub(crate) async fn bottlenecks_endpoint(
    State(state): State<AppState>,
) -> Json<BottleneckSummary> {
    Json(state.snapshot.report().bottleneck_summary())
}

pub(crate) async fn staff_endpoint(State(state): State<AppState>) -> Json<Vec<StaffCardView>> {
    Json(state.snapshot.report().staff_cards())
}

pub(crate) async fn profile_endpoint(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileView>, AppError> {
    let settings = ProfileSettings::with_overrides(query.notifications, query.dark_mode);
    state
        .snapshot
        .report()
        .profile(settings)
        .map(Json)
        .ok_or(AppError::NotFound("profile"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use office_dash::dashboard::DashboardSnapshot;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn sample_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            snapshot: Arc::new(DashboardSnapshot::sample()),
        }
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        (status, payload)
    }

    #[tokio::test]
    async fn overview_endpoint_returns_summary() {
        let Json(body) = overview_endpoint(
            State(sample_state(true)),
            Query(OverviewQuery {
                period: Some("quarter".to_string()),
            }),
        )
        .await
        .expect("overview builds");

        assert_eq!(body.period, ReportingPeriod::Quarter);
        assert_eq!(body.task_stats.total, 5);
        assert_eq!(body.top_performers.len(), 3);
        assert_eq!(body.kpis.len(), 4);
    }

    #[tokio::test]
    async fn tasks_route_filters_by_query() {
        let router = dashboard_router(sample_state(true));
        let (status, payload) =
            get_json(router, "/api/v1/tasks?status=in-progress&priority=all&assignee_id=1").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = payload["tasks"]
            .as_array()
            .expect("tasks array")
            .iter()
            .filter_map(|task| task["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["1", "5"]);
        assert_eq!(payload["filter"]["status"], "in-progress");
        assert_eq!(payload["filter"]["priority"], "all");
        assert_eq!(payload["assigned"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn blank_period_falls_back_to_week() {
        let router = dashboard_router(sample_state(true));
        let (status, payload) = get_json(router, "/api/v1/dashboard?period=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["period"], "week");
        assert_eq!(payload["taskStats"]["inProgress"], 2);

        let (status, _) =
            get_json(dashboard_router(sample_state(true)), "/api/v1/dashboard?period=year").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn profile_route_applies_toggles() {
        let router = dashboard_router(sample_state(true));
        let (status, payload) =
            get_json(router, "/api/v1/profile?dark_mode=true&notifications=false").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["id"], "1");
        assert_eq!(payload["joinedLabel"], "Joined March 2022");
        assert_eq!(payload["stats"]["projectsLed"], 5);
        assert_eq!(
            payload["settings"],
            json!({ "notifications": false, "darkMode": true })
        );
    }

    #[tokio::test]
    async fn profile_route_reports_missing_profile() {
        let mut state = sample_state(true);
        state.snapshot = Arc::new(DashboardSnapshot::default());
        let (status, payload) = get_json(dashboard_router(state), "/api/v1/profile").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "profile not found");
    }

    #[tokio::test]
    async fn tasks_route_rejects_unknown_filter() {
        let router = dashboard_router(sample_state(true));
        let (status, payload) = get_json(router, "/api/v1/tasks?status=stalled").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("stalled"));
    }

    #[tokio::test]
    async fn bottlenecks_route_lists_flagged_departments() {
        let router = dashboard_router(sample_state(true));
        let (status, payload) = get_json(router, "/api/v1/departments/bottlenecks").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["overutilized"][0]["detail"], "IT - 92% utilization");
        assert_eq!(
            payload["budgetConstrained"].as_array().map(Vec::len),
            Some(2)
        );
        assert_eq!(payload["overdueTasks"][0]["id"], "4");
    }

    #[tokio::test]
    async fn departments_and_staff_routes_respond() {
        let (status, payload) =
            get_json(dashboard_router(sample_state(true)), "/api/v1/departments").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["stats"]["totalStaff"], 5);
        assert_eq!(payload["budgetUsedLabel"], "88%");

        let (status, payload) =
            get_json(dashboard_router(sample_state(true)), "/api/v1/staff").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.as_array().map(Vec::len), Some(5));
        assert_eq!(payload[0]["statusTone"], "warning");
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, payload) = get_json(dashboard_router(sample_state(false)), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload["status"], "initializing");

        let (status, _) = get_json(dashboard_router(sample_state(true)), "/health").await;
        assert_eq!(status, StatusCode::OK);
    }
}
