use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pending, Self::InProgress, Self::Completed, Self::Overdue]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }

    /// Upper-case badge text shown on task cards.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Overdue => "OVERDUE",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(raw);
        Self::ordered()
            .into_iter()
            .find(|status| status.as_str() == token)
            .ok_or_else(|| ParseValueError::new("task status", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(raw);
        Self::ordered()
            .into_iter()
            .find(|priority| priority.as_str() == token)
            .ok_or_else(|| ParseValueError::new("task priority", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    Available,
    Busy,
    Offline,
}

impl StaffStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::Offline => "offline",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KpiTrend {
    Up,
    Down,
    Stable,
}

impl KpiTrend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Stable => "Stable",
        }
    }
}

/// A unit of work assigned to one staff member within a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: String,
    #[serde(default)]
    pub assignee_id: String,
    pub department: String,
    pub due_date: NaiveDate,
    pub created_date: NaiveDate,
    pub estimated_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

impl Task {
    /// Logged hours, zero when nothing has been recorded yet.
    pub fn logged_hours(&self) -> f64 {
        self.actual_hours.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub manager: String,
    pub staff_count: u32,
    pub active_tasks_count: u32,
    pub completed_tasks_count: u32,
    /// Average days from creation to completion.
    #[serde(default)]
    pub avg_completion_time: f64,
    pub utilization: f64,
    pub budget: f64,
    pub budget_used: f64,
}

impl Department {
    /// Share of the budget already spent. A zero budget reports nothing spent.
    pub fn budget_used_fraction(&self) -> f64 {
        ratio(self.budget_used, self.budget)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub department: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    pub active_tasks_count: u32,
    pub completed_tasks_count: u32,
    #[serde(default)]
    pub hours_worked: f64,
    pub efficiency: f64,
    pub status: StaffStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub target: f64,
    pub unit: String,
    pub trend: KpiTrend,
    /// Period-over-period change, in percent.
    pub percentage: f64,
}

impl Kpi {
    /// Progress toward target as a percentage, capped at 100.
    pub fn progress_pct(&self) -> f64 {
        (ratio(self.value, self.target) * 100.0).min(100.0)
    }
}

/// The signed-in user shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub department: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: String,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub avatar: String,
    pub stats: ProfileStats,
    #[serde(default)]
    pub recent_achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub tasks_completed: u32,
    pub hours_worked: f64,
    pub efficiency: f64,
    #[serde(default)]
    pub projects_led: u32,
}

pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Lower-cases and folds spaces/underscores to dashes so `In Progress`,
/// `in_progress` and `in-progress` all compare equal.
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseValueError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
