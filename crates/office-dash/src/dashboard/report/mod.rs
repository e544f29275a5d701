mod aggregate;
pub mod presentation;
mod summary;
pub mod views;

pub use aggregate::{
    assigned_tasks, average_utilization, department_rollups, department_stats, find_bottlenecks,
    recent_tasks, resource_allocation, task_stats, top_performers, Bottlenecks, DepartmentRollup,
    DepartmentStats, ResourceAllocation, TaskStats, BUDGET_CONSTRAINED_ABOVE, OVERUTILIZED_ABOVE,
    RECENT_TASK_COUNT, TOP_PERFORMER_COUNT,
};
pub use presentation::Tone;
pub use summary::DashboardReport;
