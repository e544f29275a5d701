use crate::infra::snapshot_for_command;
use clap::Args;
use office_dash::dashboard::report::presentation::{format_currency, format_percent};
use office_dash::dashboard::report::views::{
    BottleneckItem, BottleneckSummary, DepartmentSummary, OverviewSummary, ProfileView,
    StaffCardView, TaskBoardSummary, TaskCardView,
};
use office_dash::dashboard::{
    DepartmentView, ProfileSettings, ReportingPeriod, Selection, TaskFilter, TaskPriority,
    TaskStatus,
};
use office_dash::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct OverviewArgs {
    /// Reporting window shown in the header (week, month, quarter)
    #[arg(long, default_value = "week")]
    pub(crate) period: ReportingPeriod,
    /// JSON snapshot to report on instead of the configured or built-in records
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct TasksArgs {
    /// Status chip (all, pending, in-progress, completed, overdue)
    #[arg(long, default_value = "all")]
    pub(crate) status: Selection<TaskStatus>,
    /// Priority chip (all, high, medium, low)
    #[arg(long, default_value = "all")]
    pub(crate) priority: Selection<TaskPriority>,
    /// Also list tasks assigned to this staff id
    #[arg(long)]
    pub(crate) assignee_id: Option<String>,
    /// CSV task export replacing the snapshot's task list
    #[arg(long)]
    pub(crate) tasks_csv: Option<PathBuf>,
    /// JSON snapshot to report on instead of the configured or built-in records
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DepartmentsArgs {
    /// Section set to print (overview, staff, analytics)
    #[arg(long, default_value = "overview")]
    pub(crate) view: DepartmentView,
    /// JSON snapshot to report on instead of the configured or built-in records
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProfileArgs {
    /// Notifications toggle (true or false, on by default)
    #[arg(long)]
    pub(crate) notifications: Option<bool>,
    /// Dark mode toggle (true or false, off by default)
    #[arg(long)]
    pub(crate) dark_mode: Option<bool>,
    /// JSON snapshot to report on instead of the configured or built-in records
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

pub(crate) fn run_overview(args: OverviewArgs) -> Result<(), AppError> {
    let snapshot = snapshot_for_command(args.snapshot, None)?;
    let overview = snapshot.report().overview(args.period);
    print!("{}", render_overview(&overview));
    Ok(())
}

pub(crate) fn run_tasks(args: TasksArgs) -> Result<(), AppError> {
    let TasksArgs {
        status,
        priority,
        assignee_id,
        tasks_csv,
        snapshot,
    } = args;

    let snapshot = snapshot_for_command(snapshot, tasks_csv)?;
    let board = snapshot
        .report()
        .task_board(TaskFilter::new(status, priority), assignee_id.as_deref());
    print!("{}", render_task_board(&board));
    Ok(())
}

pub(crate) fn run_departments(args: DepartmentsArgs) -> Result<(), AppError> {
    let snapshot = snapshot_for_command(args.snapshot, None)?;
    let report = snapshot.report();
    let summary = report.departments();

    let mut out = render_department_header(&summary, args.view);
    match args.view {
        DepartmentView::Overview => out.push_str(&render_department_overview(&summary)),
        DepartmentView::Staff => out.push_str(&render_staff(&report.staff_cards())),
        DepartmentView::Analytics => {
            out.push_str(&render_bottlenecks(&report.bottleneck_summary()))
        }
    }
    print!("{out}");
    Ok(())
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let snapshot = snapshot_for_command(args.snapshot, None)?;
    let settings = ProfileSettings::with_overrides(args.notifications, args.dark_mode);
    let profile = snapshot
        .report()
        .profile(settings)
        .ok_or(AppError::NotFound("profile"))?;
    print!("{}", render_profile(&profile));
    Ok(())
}

pub(crate) fn render_overview(overview: &OverviewSummary) -> String {
    let stats = &overview.task_stats;
    let mut out = String::new();

    out.push_str("Dashboard\n");
    out.push_str(&format!("Company overview ({})\n", overview.period));
    out.push_str(&format!(
        "Tasks: {} total, {} completed, {} in progress, {} overdue\n",
        stats.total, stats.completed, stats.in_progress, stats.overdue
    ));

    out.push_str("\nKey performance indicators\n");
    for kpi in &overview.kpis {
        out.push_str(&format!(
            "- {}: {} ({}) [{}] {} of target [{}]\n",
            kpi.name,
            kpi.value_label,
            kpi.target_label,
            kpi.trend_label,
            format_percent(kpi.progress_pct),
            kpi.progress_tone.label()
        ));
    }

    out.push_str("\nRecent tasks\n");
    for task in &overview.recent_tasks {
        out.push_str(&task_line(task));
    }

    out.push_str("\nTop performers\n");
    for performer in &overview.top_performers {
        out.push_str(&format!(
            "{}. {} ({}, {}) {}% efficiency, {} tasks completed\n",
            performer.rank,
            performer.name,
            performer.role,
            performer.department,
            performer.efficiency,
            performer.completed_tasks_count
        ));
    }

    out.push_str("\nDepartment overview\n");
    for tile in &overview.departments {
        out.push_str(&format!(
            "- {}: {} staff, {} active, {}% utilization\n",
            tile.name, tile.staff_count, tile.active_tasks_count, tile.utilization
        ));
    }

    out
}

pub(crate) fn render_task_board(board: &TaskBoardSummary) -> String {
    let stats = &board.stats;
    let mut out = String::new();

    out.push_str("Tasks\n");
    out.push_str(&format!(
        "Completed {} | In progress {} | Overdue {}\n",
        stats.completed, stats.in_progress, stats.overdue
    ));

    if let Some(assigned) = &board.assigned {
        out.push_str(&format!("\nMy tasks ({})\n", assigned.len()));
        for task in assigned {
            out.push_str(&task_line(task));
        }
    }

    out.push_str(&format!(
        "\nAll tasks ({}) [status: {}, priority: {}]\n",
        board.tasks.len(),
        selection_label(board.filter.status, TaskStatus::label),
        selection_label(board.filter.priority, TaskPriority::label),
    ));
    if board.tasks.is_empty() {
        out.push_str("No tasks match the selected filters\n");
    }
    for task in &board.tasks {
        out.push_str(&task_line(task));
    }

    out
}

fn render_department_header(summary: &DepartmentSummary, view: DepartmentView) -> String {
    format!(
        "Department ({})\nTotal staff {} | Avg utilization {} | Budget used {} ({} of {})\n",
        view.label(),
        summary.stats.total_staff,
        format_percent(summary.stats.avg_utilization),
        summary.budget_used_label,
        format_currency(summary.stats.total_budget_used),
        format_currency(summary.stats.total_budget),
    )
}

fn render_department_overview(summary: &DepartmentSummary) -> String {
    let mut out = String::from("\nDepartments overview\n");
    for dept in &summary.departments {
        out.push_str(&format!(
            "- {} (manager {}): {}% utilization [{}], {} staff, {} active, avg {}d, {} budget used [{}], completed {} tasks\n",
            dept.name,
            dept.manager,
            dept.utilization,
            dept.utilization_tone.label(),
            dept.staff_count,
            dept.active_tasks_count,
            dept.avg_completion_days,
            format_percent(dept.budget_used_pct),
            dept.budget_bar_tone.label(),
            dept.completed_tasks_count
        ));
    }

    out.push_str("\nResource allocation\n");
    for entry in &summary.resource_allocation {
        out.push_str(&format!(
            "- {}: {} staff allocated, {}% utilization [{}], budget {}\n",
            entry.name,
            entry.allocated,
            entry.utilization,
            entry.bar_tone.label(),
            entry.budget_label
        ));
    }

    out
}

fn render_staff(staff: &[StaffCardView]) -> String {
    let mut out = String::from("\nStaff members\n");
    for member in staff {
        out.push_str(&format!(
            "- {} ({}, {}) {} | {} active, {} completed, {}h worked, {}% efficiency [{}]\n",
            member.name,
            member.role,
            member.department,
            member.status_label.to_uppercase(),
            member.active_tasks_count,
            member.completed_tasks_count,
            member.hours_worked,
            member.efficiency,
            member.efficiency_tone.label()
        ));
    }
    out
}

pub(crate) fn render_profile(profile: &ProfileView) -> String {
    let mut out = String::from("Profile\n");
    out.push_str(&format!(
        "{} ({}, {})\n",
        profile.name, profile.role, profile.department
    ));
    for line in [&profile.email, &profile.phone, &profile.location] {
        if !line.is_empty() {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out.push_str(&format!("  {}\n", profile.joined_label));

    let stats = &profile.stats;
    out.push_str(&format!(
        "\nTasks completed {} | Hours worked {} | Efficiency {} | Projects led {}\n",
        stats.tasks_completed, stats.hours_worked_label, stats.efficiency_label, stats.projects_led
    ));

    out.push_str("\nRecent achievements\n");
    if profile.recent_achievements.is_empty() {
        out.push_str("  No achievements yet\n");
    }
    for achievement in &profile.recent_achievements {
        out.push_str(&format!("  - {achievement}\n"));
    }

    out.push_str("\nSettings\n");
    out.push_str(&format!(
        "  Notifications: {}\n",
        if profile.settings.notifications { "on" } else { "off" }
    ));
    out.push_str(&format!("  Theme: {}\n", profile.settings.theme_label()));
    out
}

pub(crate) fn render_bottlenecks(summary: &BottleneckSummary) -> String {
    let mut out = String::from("\nBottleneck analysis\n");
    push_section(
        &mut out,
        "Overutilized departments",
        &summary.overutilized,
        "No overutilized departments",
    );
    push_section(
        &mut out,
        "Budget constraints",
        &summary.budget_constrained,
        "No budget constraints",
    );
    push_section(
        &mut out,
        "Task bottlenecks",
        &summary.overdue_tasks,
        "No overdue tasks",
    );
    out
}

fn push_section(out: &mut String, title: &str, items: &[BottleneckItem], empty: &str) {
    out.push_str(&format!("{title}\n"));
    if items.is_empty() {
        out.push_str(&format!("  {empty}\n"));
    }
    for item in items {
        out.push_str(&format!("  - {}\n", item.detail));
    }
}

fn task_line(task: &TaskCardView) -> String {
    format!(
        "- [{}] {} ({} priority) | {} | {} | due {} | {}\n",
        task.status_badge,
        task.title,
        task.priority_label,
        task.assignee,
        task.department,
        task.due_label,
        task.hours_label
    )
}

fn selection_label<T>(selection: Selection<T>, label: fn(T) -> &'static str) -> &'static str {
    match selection {
        Selection::All => "All",
        Selection::Only(value) => label(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use office_dash::dashboard::DashboardSnapshot;

    #[test]
    fn overview_lists_ranked_performers() {
        let snapshot = DashboardSnapshot::sample();
        let rendered = render_overview(&snapshot.report().overview(ReportingPeriod::Week));
        assert!(rendered.contains("Company overview (Week)"));
        assert!(rendered.contains("1. Lisa Davis (HR Manager, HR) 95% efficiency"));
        assert!(rendered.contains(
            "- Task Completion Rate: 87% (Target: 85%) [+2.4%] 100% of target [positive]"
        ));
    }

    #[test]
    fn task_board_reports_empty_filters() {
        let snapshot = DashboardSnapshot::sample();
        let filter = TaskFilter::new(
            Selection::Only(TaskStatus::Completed),
            Selection::Only(TaskPriority::Low),
        );
        let rendered = render_task_board(&snapshot.report().task_board(filter, None));
        assert!(rendered.contains("All tasks (0) [status: Completed, priority: Low]"));
        assert!(rendered.contains("No tasks match the selected filters"));
        assert!(!rendered.contains("My tasks"));
    }

    #[test]
    fn profile_lists_contact_stats_and_toggles() {
        let snapshot = DashboardSnapshot::sample();
        let profile = snapshot
            .report()
            .profile(ProfileSettings::with_overrides(None, Some(true)))
            .expect("sample profile");
        let rendered = render_profile(&profile);
        assert!(rendered.contains("Sarah Johnson (Finance Manager, Finance)"));
        assert!(rendered.contains("  Joined March 2022"));
        assert!(rendered.contains(
            "Tasks completed 28 | Hours worked 168h | Efficiency 92% | Projects led 5"
        ));
        assert!(rendered.contains("  - Led Budget Planning Initiative"));
        assert!(rendered.contains("  Notifications: on"));
        assert!(rendered.contains("  Theme: Dark"));
    }

    #[test]
    fn bottlenecks_render_empty_sections() {
        let snapshot = DashboardSnapshot::default();
        let rendered = render_bottlenecks(&snapshot.report().bottleneck_summary());
        assert!(rendered.contains("No overutilized departments"));
        assert!(rendered.contains("No budget constraints"));
        assert!(rendered.contains("No overdue tasks"));
    }
}
