use super::super::domain::{ratio, Department, Staff, Task, TaskStatus};
use serde::Serialize;

/// Departments above this utilization are flagged as overutilized.
pub const OVERUTILIZED_ABOVE: f64 = 90.0;
/// Departments that spent more than this share of budget are flagged as constrained.
pub const BUDGET_CONSTRAINED_ABOVE: f64 = 0.9;
pub const TOP_PERFORMER_COUNT: usize = 3;
pub const RECENT_TASK_COUNT: usize = 3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
            TaskStatus::Overdue => self.overdue,
        }
    }
}

pub fn task_stats(tasks: &[Task]) -> TaskStats {
    tasks.iter().fold(TaskStats::default(), |mut stats, task| {
        stats.total += 1;
        match task.status {
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Completed => stats.completed += 1,
            TaskStatus::Overdue => stats.overdue += 1,
        }
        stats
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRollup<'a> {
    pub department: &'a Department,
    pub utilization: f64,
    pub budget_used_fraction: f64,
}

pub fn department_rollups(departments: &[Department]) -> Vec<DepartmentRollup<'_>> {
    departments
        .iter()
        .map(|department| DepartmentRollup {
            department,
            utilization: department.utilization,
            budget_used_fraction: department.budget_used_fraction(),
        })
        .collect()
}

/// Arithmetic mean of department utilization; zero for no departments.
pub fn average_utilization(departments: &[Department]) -> f64 {
    let total: f64 = departments.iter().map(|dept| dept.utilization).sum();
    ratio(total, departments.len() as f64)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub total_staff: usize,
    pub total_budget: f64,
    pub total_budget_used: f64,
    pub avg_utilization: f64,
    pub budget_used_fraction: f64,
}

pub fn department_stats(departments: &[Department], staff: &[Staff]) -> DepartmentStats {
    let total_budget: f64 = departments.iter().map(|dept| dept.budget).sum();
    let total_budget_used: f64 = departments.iter().map(|dept| dept.budget_used).sum();

    DepartmentStats {
        total_staff: staff.len(),
        total_budget,
        total_budget_used,
        avg_utilization: average_utilization(departments),
        budget_used_fraction: ratio(total_budget_used, total_budget),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAllocation {
    pub name: String,
    pub allocated: u32,
    pub utilization: f64,
    pub budget: f64,
    pub budget_used: f64,
}

pub fn resource_allocation(departments: &[Department]) -> Vec<ResourceAllocation> {
    departments
        .iter()
        .map(|dept| ResourceAllocation {
            name: dept.name.clone(),
            allocated: dept.staff_count,
            utilization: dept.utilization,
            budget: dept.budget,
            budget_used: dept.budget_used,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bottlenecks<'a> {
    pub overutilized: Vec<&'a Department>,
    pub budget_constrained: Vec<&'a Department>,
    pub overdue_tasks: Vec<&'a Task>,
}

impl Bottlenecks<'_> {
    pub fn is_clear(&self) -> bool {
        self.overutilized.is_empty()
            && self.budget_constrained.is_empty()
            && self.overdue_tasks.is_empty()
    }
}

pub fn find_bottlenecks<'a>(departments: &'a [Department], tasks: &'a [Task]) -> Bottlenecks<'a> {
    Bottlenecks {
        overutilized: departments
            .iter()
            .filter(|dept| dept.utilization > OVERUTILIZED_ABOVE)
            .collect(),
        budget_constrained: departments
            .iter()
            .filter(|dept| dept.budget_used_fraction() > BUDGET_CONSTRAINED_ABOVE)
            .collect(),
        overdue_tasks: tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Overdue)
            .collect(),
    }
}

/// Highest efficiency first; equal scores keep their input order.
pub fn top_performers(staff: &[Staff], limit: usize) -> Vec<&Staff> {
    let mut ranked: Vec<&Staff> = staff.iter().collect();
    ranked.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    ranked.truncate(limit);
    ranked
}

/// Newest tasks by creation date; ties keep their input order.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    ordered.truncate(limit);
    ordered
}

pub fn assigned_tasks<'a>(tasks: &'a [Task], assignee_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.assignee_id == assignee_id)
        .collect()
}
