use super::super::domain::{
    Department, Kpi, KpiTrend, Profile, ProfileStats, Staff, StaffStatus, Task, TaskPriority,
    TaskStatus,
};
use super::super::selection::{ProfileSettings, ReportingPeriod, TaskFilter};
use super::aggregate::{DepartmentStats, ResourceAllocation, TaskStats};
use super::presentation::{
    budget_bar_tone, efficiency_tone, format_currency, format_hours, format_metric,
    format_month_year, format_percent, format_short_date, format_trend, kpi_progress_tone,
    priority_tone, staff_status_tone, task_status_tone, trend_tone, utilization_bar_tone,
    utilization_tone, Tone,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub status_badge: &'static str,
    pub status_tone: Tone,
    pub priority: TaskPriority,
    pub priority_label: &'static str,
    pub priority_tone: Tone,
    pub assignee: String,
    pub department: String,
    pub due_date: NaiveDate,
    pub due_label: String,
    pub actual_hours: f64,
    pub estimated_hours: f64,
    pub hours_label: String,
}

impl From<&Task> for TaskCardView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            status_badge: task.status.badge(),
            status_tone: task_status_tone(task.status),
            priority: task.priority,
            priority_label: task.priority.label(),
            priority_tone: priority_tone(task.priority),
            assignee: task.assignee.clone(),
            department: task.department.clone(),
            due_date: task.due_date,
            due_label: format_short_date(task.due_date),
            actual_hours: task.logged_hours(),
            estimated_hours: task.estimated_hours,
            hours_label: format_hours(task.logged_hours(), task.estimated_hours),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCardView {
    pub id: String,
    pub name: String,
    pub manager: String,
    pub staff_count: u32,
    pub active_tasks_count: u32,
    pub completed_tasks_count: u32,
    pub avg_completion_days: f64,
    pub utilization: f64,
    pub utilization_tone: Tone,
    pub budget_used_pct: f64,
    pub budget_bar_tone: Tone,
    pub budget_label: String,
}

impl From<&Department> for DepartmentCardView {
    fn from(dept: &Department) -> Self {
        Self {
            id: dept.id.clone(),
            name: dept.name.clone(),
            manager: dept.manager.clone(),
            staff_count: dept.staff_count,
            active_tasks_count: dept.active_tasks_count,
            completed_tasks_count: dept.completed_tasks_count,
            avg_completion_days: dept.avg_completion_time,
            utilization: dept.utilization,
            utilization_tone: utilization_tone(dept.utilization),
            budget_used_pct: dept.budget_used_fraction() * 100.0,
            budget_bar_tone: budget_bar_tone(dept.budget_used_fraction()),
            budget_label: budget_label(dept.budget_used, dept.budget),
        }
    }
}

/// Compact department tile on the overview screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTileView {
    pub name: String,
    pub staff_count: u32,
    pub active_tasks_count: u32,
    pub utilization: f64,
    pub bar_tone: Tone,
}

impl From<&Department> for DepartmentTileView {
    fn from(dept: &Department) -> Self {
        Self {
            name: dept.name.clone(),
            staff_count: dept.staff_count,
            active_tasks_count: dept.active_tasks_count,
            utilization: dept.utilization,
            bar_tone: utilization_bar_tone(dept.utilization),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAllocationView {
    pub name: String,
    pub allocated: u32,
    pub utilization: f64,
    pub bar_tone: Tone,
    pub budget_label: String,
}

impl From<ResourceAllocation> for ResourceAllocationView {
    fn from(entry: ResourceAllocation) -> Self {
        Self {
            bar_tone: utilization_bar_tone(entry.utilization),
            budget_label: budget_label(entry.budget_used, entry.budget),
            name: entry.name,
            allocated: entry.allocated,
            utilization: entry.utilization,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCardView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub avatar: String,
    pub status: StaffStatus,
    pub status_label: &'static str,
    pub status_tone: Tone,
    pub active_tasks_count: u32,
    pub completed_tasks_count: u32,
    pub hours_worked: f64,
    pub efficiency: f64,
    pub efficiency_tone: Tone,
}

impl From<&Staff> for StaffCardView {
    fn from(member: &Staff) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            role: member.role.clone(),
            department: member.department.clone(),
            email: member.email.clone(),
            avatar: member.avatar.clone(),
            status: member.status,
            status_label: member.status.label(),
            status_tone: staff_status_tone(member.status),
            active_tasks_count: member.active_tasks_count,
            completed_tasks_count: member.completed_tasks_count,
            hours_worked: member.hours_worked,
            efficiency: member.efficiency,
            efficiency_tone: efficiency_tone(member.efficiency),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerView {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub efficiency: f64,
    pub completed_tasks_count: u32,
}

impl PerformerView {
    pub(crate) fn ranked(rank: usize, member: &Staff) -> Self {
        Self {
            rank,
            id: member.id.clone(),
            name: member.name.clone(),
            role: member.role.clone(),
            department: member.department.clone(),
            efficiency: member.efficiency,
            completed_tasks_count: member.completed_tasks_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCardView {
    pub id: String,
    pub name: String,
    pub value_label: String,
    pub target_label: String,
    pub progress_pct: f64,
    pub progress_tone: Tone,
    pub trend: KpiTrend,
    pub trend_label: String,
    pub trend_tone: Tone,
}

impl From<&Kpi> for KpiCardView {
    fn from(kpi: &Kpi) -> Self {
        Self {
            id: kpi.id.clone(),
            name: kpi.name.clone(),
            value_label: format_metric(kpi.value, &kpi.unit),
            target_label: format!("Target: {}", format_metric(kpi.target, &kpi.unit)),
            progress_pct: kpi.progress_pct(),
            progress_tone: kpi_progress_tone(kpi.value, kpi.target),
            trend: kpi.trend,
            trend_label: format_trend(kpi.percentage),
            trend_tone: trend_tone(kpi.trend),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckItem {
    pub id: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckSummary {
    pub overutilized: Vec<BottleneckItem>,
    pub budget_constrained: Vec<BottleneckItem>,
    pub overdue_tasks: Vec<BottleneckItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary {
    pub period: ReportingPeriod,
    pub task_stats: TaskStats,
    pub kpis: Vec<KpiCardView>,
    pub recent_tasks: Vec<TaskCardView>,
    pub top_performers: Vec<PerformerView>,
    pub departments: Vec<DepartmentTileView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBoardSummary {
    pub filter: TaskFilter,
    pub stats: TaskStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned: Option<Vec<TaskCardView>>,
    pub tasks: Vec<TaskCardView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub stats: DepartmentStats,
    pub budget_used_label: String,
    pub departments: Vec<DepartmentCardView>,
    pub resource_allocation: Vec<ResourceAllocationView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsView {
    pub tasks_completed: u32,
    pub hours_worked_label: String,
    pub efficiency_label: String,
    pub projects_led: u32,
}

impl From<ProfileStats> for ProfileStatsView {
    fn from(stats: ProfileStats) -> Self {
        Self {
            tasks_completed: stats.tasks_completed,
            hours_worked_label: format!("{}h", format_metric(stats.hours_worked, "")),
            efficiency_label: format_metric(stats.efficiency, "%"),
            projects_led: stats.projects_led,
        }
    }
}

/// Profile screen: contact card, headline stats, achievements and toggles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar: String,
    pub join_date: NaiveDate,
    pub joined_label: String,
    pub stats: ProfileStatsView,
    pub recent_achievements: Vec<String>,
    pub settings: ProfileSettings,
}

impl ProfileView {
    pub(crate) fn new(profile: &Profile, settings: ProfileSettings) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            role: profile.role.clone(),
            department: profile.department.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            location: profile.location.clone(),
            avatar: profile.avatar.clone(),
            join_date: profile.join_date,
            joined_label: format!("Joined {}", format_month_year(profile.join_date)),
            stats: ProfileStatsView::from(profile.stats),
            recent_achievements: profile.recent_achievements.clone(),
            settings,
        }
    }
}

pub(crate) fn budget_label(used: f64, budget: f64) -> String {
    format!("{} / {}", format_currency(used), format_currency(budget))
}

pub(crate) fn percent_label(fraction: f64) -> String {
    format_percent(fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn department(budget: f64, budget_used: f64) -> Department {
        Department {
            id: "9".to_string(),
            name: "Legal".to_string(),
            manager: "Ana Ruiz".to_string(),
            staff_count: 3,
            active_tasks_count: 2,
            completed_tasks_count: 10,
            avg_completion_time: 2.0,
            utilization: 70.0,
            budget,
            budget_used,
        }
    }

    #[test]
    fn budget_bar_turns_critical_only_past_ninety_percent() {
        let at_line = DepartmentCardView::from(&department(100_000.0, 90_000.0));
        assert_eq!(at_line.budget_bar_tone, Tone::Positive);

        let over = DepartmentCardView::from(&department(100_000.0, 95_000.0));
        assert_eq!(over.budget_bar_tone, Tone::Critical);
        assert_eq!(over.budget_label, "$95,000 / $100,000");
    }

    #[test]
    fn kpi_card_meeting_target_is_positive() {
        let kpi = Kpi {
            id: "1".to_string(),
            name: "Task Completion Rate".to_string(),
            value: 85.0,
            target: 85.0,
            unit: "%".to_string(),
            trend: KpiTrend::Stable,
            percentage: 0.0,
        };
        let card = KpiCardView::from(&kpi);
        assert_eq!(card.progress_tone, Tone::Positive);
        assert_eq!(card.progress_pct, 100.0);

        let behind = KpiCardView::from(&Kpi { value: 78.0, target: 80.0, ..kpi });
        assert_eq!(behind.progress_tone, Tone::Warning);
    }

    #[test]
    fn card_fields_serialize_in_camel_case() {
        let json = serde_json::to_value(DepartmentCardView::from(&department(0.0, 0.0)))
            .expect("serialize card");
        assert_eq!(json["budgetBarTone"], "positive");
        assert_eq!(json["activeTasksCount"], 2);
        assert!(json.get("budget_bar_tone").is_none());
    }
}
