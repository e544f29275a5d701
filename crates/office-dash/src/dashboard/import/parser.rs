use super::super::domain::{Task, TaskPriority, TaskStatus};
use super::TaskImportError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_tasks<R: Read>(reader: R) -> Result<Vec<Task>, TaskImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut tasks = Vec::new();

    for (index, record) in csv_reader.deserialize::<TaskRow>().enumerate() {
        // Header is line 1, so the first data row is line 2.
        let line = index + 2;
        let row = record?;
        tasks.push(row.into_task(line)?);
    }

    Ok(tasks)
}

#[derive(Debug, Deserialize)]
struct TaskRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Priority")]
    priority: String,
    #[serde(rename = "Assignee")]
    assignee: String,
    #[serde(rename = "Assignee ID", default)]
    assignee_id: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Due Date")]
    due_date: String,
    #[serde(rename = "Created Date")]
    created_date: String,
    #[serde(rename = "Estimated Hours")]
    estimated_hours: f64,
    #[serde(
        rename = "Actual Hours",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    actual_hours: Option<String>,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(
        rename = "Dependencies",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    dependencies: Option<String>,
}

impl TaskRow {
    fn into_task(self, line: usize) -> Result<Task, TaskImportError> {
        let status = self
            .status
            .parse::<TaskStatus>()
            .map_err(|source| TaskImportError::InvalidValue { line, source })?;
        let priority = self
            .priority
            .parse::<TaskPriority>()
            .map_err(|source| TaskImportError::InvalidValue { line, source })?;
        let due_date = parse_date(&self.due_date, "Due Date", line)?;
        let created_date = parse_date(&self.created_date, "Created Date", line)?;
        let actual_hours = self
            .actual_hours
            .as_deref()
            .map(|raw| parse_hours(raw, line))
            .transpose()?;
        let dependencies = self
            .dependencies
            .as_deref()
            .map(split_list)
            .unwrap_or_default();

        Ok(Task {
            id: self.id,
            title: self.title,
            description: self.description,
            status,
            priority,
            assignee: self.assignee,
            assignee_id: self.assignee_id,
            department: self.department,
            due_date,
            created_date,
            estimated_hours: self.estimated_hours,
            actual_hours,
            dependencies,
            attachments: Vec::new(),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(raw: &str, field: &'static str, line: usize) -> Result<NaiveDate, TaskImportError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| TaskImportError::InvalidField {
        line,
        field,
        value: raw.to_string(),
    })
}

fn parse_hours(raw: &str, line: usize) -> Result<f64, TaskImportError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TaskImportError::InvalidField {
            line,
            field: "Actual Hours",
            value: raw.to_string(),
        })
}

/// Dependency cells list task ids separated by `;`.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_lists_split_on_semicolons() {
        assert_eq!(split_list("1; 3;;"), vec!["1".to_string(), "3".to_string()]);
        assert!(split_list(" ").is_empty());
    }
}
