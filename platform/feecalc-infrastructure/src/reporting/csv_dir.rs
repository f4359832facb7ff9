use super::{
    trade_row_strings, BY_INSTRUMENT_COLUMNS, BY_INSTRUMENT_SHEET, SUMMARY_COLUMNS,
    SUMMARY_SHEET, TRADES_SHEET, TRADE_COLUMNS,
};
use feecalc_domain::entities::report::{FeeReport, FeeSummary, InstrumentBreakdown};
use feecalc_domain::repositories::report::ReportWriter;
use feecalc_domain::value_objects::enriched_trade::EnrichedTrade;
use std::fs;
use std::path::Path;

/// Writes `<dir>/trades_with_fees.csv`, `<dir>/summary.csv` and
/// `<dir>/by_instrument.csv`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvDirReportWriter;

impl CsvDirReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for CsvDirReportWriter {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn write_report(&self, path: &Path, report: &FeeReport) -> Result<(), String> {
        fs::create_dir_all(path)
            .map_err(|err| format!("failed to create report dir {}: {}", path.display(), err))?;
        write_trades_csv(&path.join(format!("{TRADES_SHEET}.csv")), &report.trades)?;
        write_summary_csv(&path.join(format!("{SUMMARY_SHEET}.csv")), &report.summary)?;
        write_by_instrument_csv(
            &path.join(format!("{BY_INSTRUMENT_SHEET}.csv")),
            &report.by_instrument,
        )
    }
}

pub fn write_trades_csv(path: &Path, trades: &[EnrichedTrade]) -> Result<(), String> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|err| format!("failed to create trades csv {}: {}", path.display(), err))?;
    wtr.write_record(TRADE_COLUMNS)
        .map_err(|err| format!("failed to write trades csv header: {}", err))?;

    for trade in trades {
        wtr.write_record(trade_row_strings(trade))
            .map_err(|err| format!("failed to write trades row: {}", err))?;
    }

    wtr.flush()
        .map_err(|err| format!("failed to flush trades csv: {}", err))
}

pub fn write_summary_csv(path: &Path, summary: &FeeSummary) -> Result<(), String> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|err| format!("failed to create summary csv {}: {}", path.display(), err))?;
    wtr.write_record(SUMMARY_COLUMNS)
        .map_err(|err| format!("failed to write summary csv header: {}", err))?;

    for (metric, amount) in summary.metric_rows() {
        wtr.write_record([metric.to_string(), amount.to_string()])
            .map_err(|err| format!("failed to write summary row: {}", err))?;
    }

    wtr.flush()
        .map_err(|err| format!("failed to flush summary csv: {}", err))
}

pub fn write_by_instrument_csv(path: &Path, rows: &[InstrumentBreakdown]) -> Result<(), String> {
    let mut wtr = csv::Writer::from_path(path).map_err(|err| {
        format!(
            "failed to create by_instrument csv {}: {}",
            path.display(),
            err
        )
    })?;
    wtr.write_record(BY_INSTRUMENT_COLUMNS)
        .map_err(|err| format!("failed to write by_instrument csv header: {}", err))?;

    for row in rows {
        wtr.write_record([
            row.instrument.clone(),
            row.trades.to_string(),
            row.total_notional.to_string(),
            row.total_fees.to_string(),
        ])
        .map_err(|err| format!("failed to write by_instrument row: {}", err))?;
    }

    wtr.flush()
        .map_err(|err| format!("failed to flush by_instrument csv: {}", err))
}
