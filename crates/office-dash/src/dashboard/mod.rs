pub mod domain;
mod fixtures;
pub mod import;
pub mod report;
pub mod selection;
mod snapshot;

pub use domain::{
    Department, Kpi, KpiTrend, ParseValueError, Profile, ProfileStats, Staff, StaffStatus, Task,
    TaskPriority, TaskStatus,
};
pub use import::{TaskCsvImporter, TaskImportError};
pub use report::DashboardReport;
pub use selection::{
    DepartmentView, FilterParseError, ProfileSettings, ReportingPeriod, Selection, TaskFilter,
};
pub use snapshot::{DashboardSnapshot, SnapshotError};
