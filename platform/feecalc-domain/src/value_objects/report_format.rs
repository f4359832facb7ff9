use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Single workbook, one sheet per table.
    Xlsx,
    /// Directory with one CSV file per table.
    Csv,
}

impl ReportFormat {
    /// `.xlsx` paths (any case) get a workbook, anything else a CSV directory.
    pub fn from_path(path: &Path) -> Self {
        let is_xlsx = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
            .unwrap_or(false);
        if is_xlsx {
            Self::Xlsx
        } else {
            Self::Csv
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}
