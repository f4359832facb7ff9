use crate::config::{Config, LogFormat};
use feecalc_domain::value_objects::report_format::ReportFormat;
use feecalc_domain::value_objects::trade_side::TradeSide;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "fee_report.xlsx";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Values given explicitly on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub incoming_side: Option<TradeSide>,
    pub format: Option<ReportFormat>,
    pub json_summary: bool,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub incoming_side: TradeSide,
    pub format: ReportFormat,
    pub json_summary: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Command line beats config file, config file beats built-in defaults.
pub fn resolve(overrides: Overrides, config: Option<&Config>) -> RunSettings {
    let output = overrides
        .output
        .or_else(|| {
            config
                .and_then(|c| c.paths.as_ref())
                .and_then(|p| p.output.as_deref())
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let incoming_side = overrides
        .incoming_side
        .or_else(|| config.map(|c| c.run.incoming_side))
        .unwrap_or_default();

    let format = overrides
        .format
        .or_else(|| config.and_then(|c| c.report.as_ref()).and_then(|r| r.format))
        .unwrap_or_else(|| ReportFormat::from_path(&output));

    let json_summary = overrides.json_summary
        || config
            .and_then(|c| c.report.as_ref())
            .and_then(|r| r.json_summary)
            .unwrap_or(false);

    let logging = config.and_then(|c| c.logging.as_ref());
    let log_level = overrides
        .log_level
        .or_else(|| logging.and_then(|l| l.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_format = overrides
        .log_format
        .or_else(|| logging.and_then(|l| l.format))
        .unwrap_or_default();

    RunSettings {
        input: overrides.input,
        output,
        incoming_side,
        format,
        json_summary,
        log_level,
        log_format,
    }
}
