use metrics_exporter_prometheus::PrometheusHandle;
use office_dash::config::AppConfig;
use office_dash::dashboard::{DashboardSnapshot, TaskCsvImporter};
use office_dash::error::AppError;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) snapshot: Arc<DashboardSnapshot>,
}

/// Loads the snapshot file when one is configured, otherwise the built-in sample set.
pub(crate) fn load_snapshot(path: Option<&Path>) -> Result<DashboardSnapshot, AppError> {
    match path {
        Some(path) => {
            let snapshot = DashboardSnapshot::from_path(path)?;
            info!(
                path = %path.display(),
                tasks = snapshot.tasks.len(),
                departments = snapshot.departments.len(),
                staff = snapshot.staff.len(),
                kpis = snapshot.kpis.len(),
                "loaded dashboard snapshot"
            );
            Ok(snapshot)
        }
        None => {
            info!("no snapshot configured; using built-in sample records");
            Ok(DashboardSnapshot::sample())
        }
    }
}

/// Resolves the snapshot for a CLI command: `--snapshot` wins over `DASH_SNAPSHOT_PATH`,
/// and `--tasks-csv` replaces the task list afterwards.
pub(crate) fn snapshot_for_command(
    snapshot_override: Option<PathBuf>,
    tasks_csv: Option<PathBuf>,
) -> Result<DashboardSnapshot, AppError> {
    let snapshot_path = match snapshot_override {
        Some(path) => Some(path),
        None => AppConfig::load()?.data.snapshot_path,
    };
    let snapshot = load_snapshot(snapshot_path.as_deref())?;

    match tasks_csv {
        Some(path) => {
            let tasks = TaskCsvImporter::from_path(&path)?;
            info!(path = %path.display(), count = tasks.len(), "replaced tasks from CSV export");
            Ok(snapshot.with_tasks(tasks))
        }
        None => Ok(snapshot),
    }
}
