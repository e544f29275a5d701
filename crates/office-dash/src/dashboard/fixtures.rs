use super::domain::{
    Department, Kpi, KpiTrend, Profile, ProfileStats, Staff, StaffStatus, Task, TaskPriority,
    TaskStatus,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
    (assignee, assignee_id): (&str, &str),
    department: &str,
    due_date: NaiveDate,
    created_date: NaiveDate,
    estimated_hours: f64,
    actual_hours: Option<f64>,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        assignee: assignee.to_string(),
        assignee_id: assignee_id.to_string(),
        department: department.to_string(),
        due_date,
        created_date,
        estimated_hours,
        actual_hours,
        dependencies: Vec::new(),
        attachments: Vec::new(),
    }
}

pub(crate) fn sample_tasks() -> Vec<Task> {
    vec![
        task(
            "1",
            "Quarterly Report Analysis",
            "Analyze Q4 financial performance and create comprehensive report",
            TaskStatus::InProgress,
            TaskPriority::High,
            ("Sarah Johnson", "1"),
            "Finance",
            date(2025, 1, 15),
            date(2025, 1, 8),
            16.0,
            Some(8.0),
        ),
        task(
            "2",
            "Website Redesign",
            "Complete frontend redesign for company website",
            TaskStatus::Pending,
            TaskPriority::Medium,
            ("Mike Chen", "2"),
            "IT",
            date(2025, 1, 20),
            date(2025, 1, 10),
            40.0,
            None,
        ),
        task(
            "3",
            "Employee Training Program",
            "Develop and implement new employee onboarding program",
            TaskStatus::Completed,
            TaskPriority::High,
            ("Lisa Davis", "3"),
            "HR",
            date(2025, 1, 12),
            date(2025, 1, 5),
            24.0,
            Some(22.0),
        ),
        task(
            "4",
            "Marketing Campaign Launch",
            "Execute Q1 marketing campaign across all channels",
            TaskStatus::Overdue,
            TaskPriority::High,
            ("David Wilson", "4"),
            "Marketing",
            date(2025, 1, 10),
            date(2025, 1, 3),
            32.0,
            Some(35.0),
        ),
        task(
            "5",
            "Security Audit",
            "Conduct comprehensive security audit of all systems",
            TaskStatus::InProgress,
            TaskPriority::High,
            ("Alex Rodriguez", "5"),
            "IT",
            date(2025, 1, 18),
            date(2025, 1, 12),
            20.0,
            Some(12.0),
        ),
    ]
}

pub(crate) fn sample_departments() -> Vec<Department> {
    [
        ("1", "Finance", "Sarah Johnson", 8, 12, 45, 3.2, 85.0, 500_000.0, 425_000.0),
        ("2", "IT", "Mike Chen", 15, 23, 67, 4.1, 92.0, 750_000.0, 680_000.0),
        ("3", "HR", "Lisa Davis", 6, 8, 34, 2.8, 78.0, 300_000.0, 245_000.0),
        ("4", "Marketing", "David Wilson", 10, 18, 52, 3.5, 88.0, 600_000.0, 545_000.0),
    ]
    .into_iter()
    .map(
        |(id, name, manager, staff, active, completed, avg_days, utilization, budget, used)| {
            Department {
                id: id.to_string(),
                name: name.to_string(),
                manager: manager.to_string(),
                staff_count: staff,
                active_tasks_count: active,
                completed_tasks_count: completed,
                avg_completion_time: avg_days,
                utilization,
                budget,
                budget_used: used,
            }
        },
    )
    .collect()
}

pub(crate) fn sample_staff() -> Vec<Staff> {
    [
        ("1", "Sarah Johnson", "sarah.johnson", "Finance", "Finance Manager", "774909", 3, 28, 168.0, 92.0, StaffStatus::Busy),
        ("2", "Mike Chen", "mike.chen", "IT", "Senior Developer", "1222271", 4, 35, 172.0, 87.0, StaffStatus::Available),
        ("3", "Lisa Davis", "lisa.davis", "HR", "HR Manager", "1130626", 2, 22, 160.0, 95.0, StaffStatus::Available),
        ("4", "David Wilson", "david.wilson", "Marketing", "Marketing Director", "1681010", 5, 31, 180.0, 83.0, StaffStatus::Busy),
        ("5", "Alex Rodriguez", "alex.rodriguez", "IT", "Security Specialist", "1043471", 3, 19, 165.0, 89.0, StaffStatus::Available),
    ]
    .into_iter()
    .map(
        |(id, name, mailbox, department, role, photo, active, completed, hours, efficiency, status)| {
            Staff {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{mailbox}@company.com"),
                department: department.to_string(),
                role: role.to_string(),
                avatar: format!(
                    "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"
                ),
                active_tasks_count: active,
                completed_tasks_count: completed,
                hours_worked: hours,
                efficiency,
                status,
            }
        },
    )
    .collect()
}

pub(crate) fn sample_kpis() -> Vec<Kpi> {
    [
        ("1", "Task Completion Rate", 87.0, 85.0, "%", KpiTrend::Up, 2.4),
        ("2", "Average Response Time", 2.3, 3.0, "hours", KpiTrend::Down, 23.3),
        ("3", "Team Productivity", 92.0, 90.0, "%", KpiTrend::Up, 2.2),
        ("4", "Budget Utilization", 78.0, 80.0, "%", KpiTrend::Stable, 0.0),
    ]
    .into_iter()
    .map(|(id, name, value, target, unit, trend, percentage)| Kpi {
        id: id.to_string(),
        name: name.to_string(),
        value,
        target,
        unit: unit.to_string(),
        trend,
        percentage,
    })
    .collect()
}

/// The signed-in user on the profile screen; the same person as staff member 1.
pub(crate) fn sample_profile() -> Profile {
    Profile {
        id: "1".to_string(),
        name: "Sarah Johnson".to_string(),
        email: "sarah.johnson@company.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        department: "Finance".to_string(),
        role: "Finance Manager".to_string(),
        location: "New York, NY".to_string(),
        join_date: date(2022, 3, 15),
        avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
        stats: ProfileStats {
            tasks_completed: 28,
            hours_worked: 168.0,
            efficiency: 92.0,
            projects_led: 5,
        },
        recent_achievements: vec![
            "Completed Q4 Financial Report".to_string(),
            "Led Budget Planning Initiative".to_string(),
            "Achieved 95% Task Completion Rate".to_string(),
        ],
    }
}
