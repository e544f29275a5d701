use super::super::domain::{KpiTrend, StaffStatus, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Semantic color bucket for badges, dots and bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Warning,
    Critical,
    Neutral,
}

impl Tone {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Neutral => "neutral",
        }
    }
}

pub fn utilization_tone(utilization: f64) -> Tone {
    if utilization >= 90.0 {
        Tone::Critical
    } else if utilization >= 80.0 {
        Tone::Warning
    } else {
        Tone::Positive
    }
}

/// Fill color for utilization bars, which only turn red past the overutilized line.
pub fn utilization_bar_tone(utilization: f64) -> Tone {
    if utilization > super::aggregate::OVERUTILIZED_ABOVE {
        Tone::Critical
    } else {
        Tone::Positive
    }
}

/// Budget bars turn red once spending passes the budget-constrained line.
pub fn budget_bar_tone(budget_used_fraction: f64) -> Tone {
    if budget_used_fraction > super::aggregate::BUDGET_CONSTRAINED_ABOVE {
        Tone::Critical
    } else {
        Tone::Positive
    }
}

/// KPI progress bars are positive once the target is met, a warning until then.
pub fn kpi_progress_tone(value: f64, target: f64) -> Tone {
    if value >= target {
        Tone::Positive
    } else {
        Tone::Warning
    }
}

pub fn efficiency_tone(efficiency: f64) -> Tone {
    if efficiency >= 90.0 {
        Tone::Positive
    } else if efficiency >= 80.0 {
        Tone::Warning
    } else {
        Tone::Critical
    }
}

pub const fn task_status_tone(status: TaskStatus) -> Tone {
    match status {
        TaskStatus::Completed => Tone::Positive,
        TaskStatus::InProgress => Tone::Warning,
        TaskStatus::Overdue => Tone::Critical,
        TaskStatus::Pending => Tone::Neutral,
    }
}

pub const fn priority_tone(priority: TaskPriority) -> Tone {
    match priority {
        TaskPriority::High => Tone::Critical,
        TaskPriority::Medium => Tone::Warning,
        TaskPriority::Low => Tone::Positive,
    }
}

pub const fn staff_status_tone(status: StaffStatus) -> Tone {
    match status {
        StaffStatus::Available => Tone::Positive,
        StaffStatus::Busy => Tone::Warning,
        StaffStatus::Offline => Tone::Neutral,
    }
}

pub const fn trend_tone(trend: KpiTrend) -> Tone {
    match trend {
        KpiTrend::Up => Tone::Positive,
        KpiTrend::Down => Tone::Critical,
        KpiTrend::Stable => Tone::Neutral,
    }
}

/// Whole-dollar USD amount with thousands separators, e.g. `$425,000`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Signed change with one decimal; zero and negative values carry no plus sign.
pub fn format_trend(percentage: f64) -> String {
    if percentage > 0.0 {
        format!("+{percentage:.1}%")
    } else {
        format!("{percentage:.1}%")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Trims a trailing `.0` so whole-number metrics read like `87%` rather than `87.0%`.
pub fn format_metric(value: f64, unit: &str) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}{unit}")
    } else {
        format!("{value}{unit}")
    }
}

pub fn format_hours(actual: f64, estimated: f64) -> String {
    format!(
        "{}h / {}h",
        format_metric(actual, ""),
        format_metric(estimated, "")
    )
}

pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Long month and year, e.g. `March 2022`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(425_000.0), "$425,000");
        assert_eq!(format_currency(1_895_000.0), "$1,895,000");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-1200.0), "-$1,200");
    }

    #[test]
    fn trend_sign_matches_direction() {
        assert_eq!(format_trend(2.4), "+2.4%");
        assert_eq!(format_trend(0.0), "0.0%");
        assert_eq!(format_trend(-3.26), "-3.3%");
    }

    #[test]
    fn tone_thresholds_follow_card_rules() {
        assert_eq!(utilization_tone(92.0), Tone::Critical);
        assert_eq!(utilization_tone(90.0), Tone::Critical);
        assert_eq!(utilization_tone(85.0), Tone::Warning);
        assert_eq!(utilization_tone(78.0), Tone::Positive);
        assert_eq!(utilization_bar_tone(90.0), Tone::Positive);
        assert_eq!(utilization_bar_tone(92.0), Tone::Critical);
        assert_eq!(efficiency_tone(95.0), Tone::Positive);
        assert_eq!(efficiency_tone(83.0), Tone::Warning);
        assert_eq!(efficiency_tone(70.0), Tone::Critical);
        assert_eq!(kpi_progress_tone(85.0, 85.0), Tone::Positive);
        assert_eq!(kpi_progress_tone(92.0, 90.0), Tone::Positive);
        assert_eq!(kpi_progress_tone(78.0, 80.0), Tone::Warning);
        assert_eq!(budget_bar_tone(0.9), Tone::Positive);
        assert_eq!(budget_bar_tone(680_000.0 / 750_000.0), Tone::Critical);
        assert_eq!(budget_bar_tone(0.0), Tone::Positive);
    }

    #[test]
    fn metric_and_date_formatting() {
        assert_eq!(format_metric(87.0, "%"), "87%");
        assert_eq!(format_metric(2.3, "hours"), "2.3hours");
        assert_eq!(format_hours(0.0, 40.0), "0h / 40h");
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date");
        assert_eq!(format_short_date(date), "Jan 5");
        let joined = NaiveDate::from_ymd_opt(2022, 3, 15).expect("valid date");
        assert_eq!(format_month_year(joined), "March 2022");
    }
}
