use super::super::domain::{Department, Staff, Task};
use super::super::selection::{ProfileSettings, ReportingPeriod, TaskFilter};
use super::super::snapshot::DashboardSnapshot;
use super::aggregate::{self, Bottlenecks, DepartmentRollup, TaskStats};
use super::views::{
    percent_label, BottleneckItem, BottleneckSummary, DepartmentCardView, DepartmentSummary,
    DepartmentTileView, KpiCardView, OverviewSummary, PerformerView, ProfileView,
    ResourceAllocationView, StaffCardView, TaskBoardSummary, TaskCardView,
};

/// Read-only view over a snapshot that derives every dashboard figure on demand.
#[derive(Debug, Clone, Copy)]
pub struct DashboardReport<'a> {
    snapshot: &'a DashboardSnapshot,
}

impl<'a> DashboardReport<'a> {
    pub fn new(snapshot: &'a DashboardSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn task_stats(&self) -> TaskStats {
        aggregate::task_stats(&self.snapshot.tasks)
    }

    pub fn department_rollups(&self) -> Vec<DepartmentRollup<'a>> {
        aggregate::department_rollups(&self.snapshot.departments)
    }

    pub fn average_utilization(&self) -> f64 {
        aggregate::average_utilization(&self.snapshot.departments)
    }

    pub fn bottlenecks(&self) -> Bottlenecks<'a> {
        aggregate::find_bottlenecks(&self.snapshot.departments, &self.snapshot.tasks)
    }

    pub fn top_performers(&self) -> Vec<&'a Staff> {
        aggregate::top_performers(&self.snapshot.staff, aggregate::TOP_PERFORMER_COUNT)
    }

    pub fn recent_tasks(&self) -> Vec<&'a Task> {
        aggregate::recent_tasks(&self.snapshot.tasks, aggregate::RECENT_TASK_COUNT)
    }

    pub fn filter_tasks(&self, filter: &TaskFilter) -> Vec<&'a Task> {
        filter.apply(&self.snapshot.tasks)
    }

    pub fn overview(&self, period: ReportingPeriod) -> OverviewSummary {
        OverviewSummary {
            period,
            task_stats: self.task_stats(),
            kpis: self.snapshot.kpis.iter().map(KpiCardView::from).collect(),
            recent_tasks: self
                .recent_tasks()
                .into_iter()
                .map(TaskCardView::from)
                .collect(),
            top_performers: self
                .top_performers()
                .into_iter()
                .enumerate()
                .map(|(index, member)| PerformerView::ranked(index + 1, member))
                .collect(),
            departments: self
                .snapshot
                .departments
                .iter()
                .map(DepartmentTileView::from)
                .collect(),
        }
    }

    /// Task board for the given chips. `assignee_id` adds the "my tasks" list.
    pub fn task_board(&self, filter: TaskFilter, assignee_id: Option<&str>) -> TaskBoardSummary {
        let assigned = assignee_id.map(|id| {
            aggregate::assigned_tasks(&self.snapshot.tasks, id)
                .into_iter()
                .map(TaskCardView::from)
                .collect()
        });

        TaskBoardSummary {
            filter,
            stats: self.task_stats(),
            assigned,
            tasks: self
                .filter_tasks(&filter)
                .into_iter()
                .map(TaskCardView::from)
                .collect(),
        }
    }

    pub fn departments(&self) -> DepartmentSummary {
        let stats =
            aggregate::department_stats(&self.snapshot.departments, &self.snapshot.staff);

        DepartmentSummary {
            stats,
            budget_used_label: percent_label(stats.budget_used_fraction),
            departments: self
                .snapshot
                .departments
                .iter()
                .map(DepartmentCardView::from)
                .collect(),
            resource_allocation: aggregate::resource_allocation(&self.snapshot.departments)
                .into_iter()
                .map(ResourceAllocationView::from)
                .collect(),
        }
    }

    pub fn bottleneck_summary(&self) -> BottleneckSummary {
        let bottlenecks = self.bottlenecks();

        BottleneckSummary {
            overutilized: bottlenecks
                .overutilized
                .iter()
                .map(|dept| department_item(dept, format!("{}% utilization", dept.utilization)))
                .collect(),
            budget_constrained: bottlenecks
                .budget_constrained
                .iter()
                .map(|dept| {
                    let used = percent_label(dept.budget_used_fraction());
                    department_item(dept, format!("{used} budget used"))
                })
                .collect(),
            overdue_tasks: bottlenecks
                .overdue_tasks
                .iter()
                .map(|task| BottleneckItem {
                    id: task.id.clone(),
                    detail: format!("{} - {}", task.title, task.department),
                })
                .collect(),
        }
    }

    pub fn staff_cards(&self) -> Vec<StaffCardView> {
        self.snapshot.staff.iter().map(StaffCardView::from).collect()
    }

    /// Profile screen for the signed-in user, `None` when the snapshot has no profile.
    pub fn profile(&self, settings: ProfileSettings) -> Option<ProfileView> {
        self.snapshot
            .profile
            .as_ref()
            .map(|profile| ProfileView::new(profile, settings))
    }
}

fn department_item(dept: &Department, metric: String) -> BottleneckItem {
    BottleneckItem {
        id: dept.id.clone(),
        detail: format!("{} - {metric}", dept.name),
    }
}
