use crate::entities::report::FeeReport;
use std::path::Path;

pub trait ReportWriter {
    /// Short label used in logs ("xlsx", "csv", ...).
    fn format_name(&self) -> &'static str;
    fn write_report(&self, path: &Path, report: &FeeReport) -> Result<(), String>;
}
