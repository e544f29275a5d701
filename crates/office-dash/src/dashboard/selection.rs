use super::domain::{normalize_token, ParseValueError, Task, TaskPriority, TaskStatus};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A filter chip: either the `all` sentinel or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = ParseValueError>,
{
    type Err = FilterParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().is_empty() || normalize_token(raw) == "all" {
            return Ok(Self::All);
        }
        raw.parse().map(Self::Only).map_err(FilterParseError::from)
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Only(value) => value.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid filter: {0}")]
pub struct FilterParseError(#[from] ParseValueError);

/// Status and priority selection applied to the task board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskFilter {
    pub status: Selection<TaskStatus>,
    pub priority: Selection<TaskPriority>,
}

impl TaskFilter {
    pub fn new(status: Selection<TaskStatus>, priority: Selection<TaskPriority>) -> Self {
        Self { status, priority }
    }

    /// Parses raw chip values; `None`, blank and `all` select everything.
    pub fn parse(status: Option<&str>, priority: Option<&str>) -> Result<Self, FilterParseError> {
        let status = match status {
            Some(raw) => raw.parse::<Selection<TaskStatus>>()?,
            None => Selection::All,
        };
        let priority = match priority {
            Some(raw) => raw.parse::<Selection<TaskPriority>>()?,
            None => Selection::All,
        };

        Ok(Self { status, priority })
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(&task.status) && self.priority.matches(&task.priority)
    }

    /// Matching tasks in input order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}

/// Which section set the department screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentView {
    #[default]
    Overview,
    Staff,
    Analytics,
}

impl DepartmentView {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Staff => "Staff",
            Self::Analytics => "Analytics",
        }
    }
}

impl FromStr for DepartmentView {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_token(raw).as_str() {
            "overview" => Ok(Self::Overview),
            "staff" => Ok(Self::Staff),
            "analytics" => Ok(Self::Analytics),
            _ => Err(ParseValueError::new("department view", raw)),
        }
    }
}

/// Reporting window picked on the overview screen. Informational only; the
/// aggregates are computed over the whole snapshot regardless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingPeriod {
    #[default]
    Week,
    Month,
    Quarter,
}

impl ReportingPeriod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Quarter => "Quarter",
        }
    }
}

impl FromStr for ReportingPeriod {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_token(raw).as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            _ => Err(ParseValueError::new("reporting period", raw)),
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Toggle switches on the profile screen. Notifications start on, dark mode off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub notifications: bool,
    pub dark_mode: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
        }
    }
}

impl ProfileSettings {
    /// Applies the toggles that were supplied, keeping defaults for the rest.
    pub fn with_overrides(notifications: Option<bool>, dark_mode: Option<bool>) -> Self {
        let defaults = Self::default();
        Self {
            notifications: notifications.unwrap_or(defaults.notifications),
            dark_mode: dark_mode.unwrap_or(defaults.dark_mode),
        }
    }

    pub const fn theme_label(self) -> &'static str {
        if self.dark_mode {
            "Dark"
        } else {
            "Light"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardSnapshot;

    #[test]
    fn all_sentinel_selects_everything() {
        let snapshot = DashboardSnapshot::sample();
        let filter = TaskFilter::parse(Some("all"), Some("ALL")).expect("sentinel parses");
        assert_eq!(filter, TaskFilter::default());
        assert_eq!(filter.apply(&snapshot.tasks).len(), snapshot.tasks.len());
    }

    #[test]
    fn status_and_priority_combine() {
        let snapshot = DashboardSnapshot::sample();
        let filter = TaskFilter::parse(Some("in-progress"), Some("high")).expect("filter parses");
        let ids: Vec<&str> = filter
            .apply(&snapshot.tasks)
            .iter()
            .map(|task| task.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "5"]);

        let none = TaskFilter::new(
            Selection::Only(TaskStatus::Pending),
            Selection::Only(TaskPriority::High),
        );
        assert!(none.apply(&snapshot.tasks).is_empty());
    }

    #[test]
    fn completed_with_any_priority_matches_status_only() {
        let snapshot = DashboardSnapshot::sample();
        let status_only = TaskFilter::parse(Some("completed"), None).expect("filter parses");
        let with_all = TaskFilter::parse(Some("completed"), Some("all")).expect("filter parses");
        assert_eq!(
            status_only.apply(&snapshot.tasks),
            with_all.apply(&snapshot.tasks)
        );
    }

    #[test]
    fn unknown_priority_is_rejected() {
        let err = TaskFilter::parse(None, Some("urgent")).expect_err("urgent is not a priority");
        assert_eq!(err.to_string(), "invalid filter: unknown task priority 'urgent'");
    }

    #[test]
    fn selection_serializes_sentinel_and_value() {
        let filter = TaskFilter::new(Selection::Only(TaskStatus::InProgress), Selection::All);
        let json = serde_json::to_value(filter).expect("serialize filter");
        assert_eq!(
            json,
            serde_json::json!({ "status": "in-progress", "priority": "all" })
        );
    }

    #[test]
    fn view_names_parse() {
        assert_eq!(
            "Analytics".parse::<DepartmentView>(),
            Ok(DepartmentView::Analytics)
        );
        assert_eq!(
            "quarter".parse::<ReportingPeriod>(),
            Ok(ReportingPeriod::Quarter)
        );
        assert!("year".parse::<ReportingPeriod>().is_err());
    }

    #[test]
    fn profile_toggles_keep_unset_defaults() {
        let settings = ProfileSettings::with_overrides(None, Some(true));
        assert!(settings.notifications);
        assert!(settings.dark_mode);
        assert_eq!(settings.theme_label(), "Dark");
        assert_eq!(
            ProfileSettings::with_overrides(Some(false), None),
            ProfileSettings {
                notifications: false,
                dark_mode: false
            }
        );

        let json = serde_json::to_value(ProfileSettings::default()).expect("serialize settings");
        assert_eq!(
            json,
            serde_json::json!({ "notifications": true, "darkMode": false })
        );
    }
}
