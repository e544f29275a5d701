use super::domain::{Department, Kpi, Profile, Staff, Task};
use super::fixtures;
use super::report::DashboardReport;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// The four record lists every dashboard view is derived from, plus the
/// signed-in user's profile when one is known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read dashboard snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dashboard snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardSnapshot {
    /// Built-in sample records used for demos and when no snapshot file is configured.
    pub fn sample() -> Self {
        Self {
            tasks: fixtures::sample_tasks(),
            departments: fixtures::sample_departments(),
            staff: fixtures::sample_staff(),
            kpis: fixtures::sample_kpis(),
            profile: Some(fixtures::sample_profile()),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Replaces the task list, e.g. with rows from a CSV export.
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn report(&self) -> DashboardReport<'_> {
        DashboardReport::new(self)
    }
}
