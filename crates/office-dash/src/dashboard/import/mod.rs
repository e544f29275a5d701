mod parser;

use super::domain::{ParseValueError, Task};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum TaskImportError {
    #[error("failed to read task export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid task CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {source}")]
    InvalidValue {
        line: usize,
        #[source]
        source: ParseValueError,
    },
    #[error("line {line}: '{value}' is not a valid {field}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Reads task exports with `ID, Title, Status, Priority, Assignee, ...` headers.
pub struct TaskCsvImporter;

impl TaskCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, TaskImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Task>, TaskImportError> {
        let tasks = parser::parse_tasks(reader)?;
        debug!(count = tasks.len(), "imported tasks from CSV export");
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::TaskStatus;

    const HEADER: &str = "ID,Title,Status,Priority,Assignee,Assignee ID,Department,Due Date,Created Date,Estimated Hours,Actual Hours,Description\n";

    #[test]
    fn blank_actual_hours_become_none() {
        let csv = format!(
            "{HEADER}2,Website Redesign,Pending,Medium,Mike Chen,2,IT,2025-01-20,2025-01-10,40,,Redesign\n"
        );
        let tasks = TaskCsvImporter::from_reader(csv.as_bytes()).expect("import succeeds");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Pending);
        assert_eq!(tasks[0].actual_hours, None);
        assert!(tasks[0].dependencies.is_empty());
    }

    #[test]
    fn unknown_status_names_the_line() {
        let csv = format!(
            "{HEADER}1,Audit,In Progress,High,Alex,5,IT,2025-01-18,2025-01-12,20,12,\n\
             2,Other,Blocked,Low,Alex,5,IT,2025-01-18,2025-01-12,20,,\n"
        );
        let err = TaskCsvImporter::from_reader(csv.as_bytes()).expect_err("blocked is unknown");
        assert_eq!(err.to_string(), "line 3: unknown task status 'Blocked'");
    }

    #[test]
    fn malformed_due_date_is_reported() {
        let csv = format!(
            "{HEADER}1,Audit,pending,low,Alex,5,IT,18/01/2025,2025-01-12,20,,\n"
        );
        let err = TaskCsvImporter::from_reader(csv.as_bytes()).expect_err("bad date");
        assert!(matches!(
            err,
            TaskImportError::InvalidField { line: 2, field: "Due Date", .. }
        ));
    }
}
