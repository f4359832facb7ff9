use super::{
    BY_INSTRUMENT_COLUMNS, BY_INSTRUMENT_SHEET, SUMMARY_COLUMNS, SUMMARY_SHEET, TRADES_SHEET,
    TRADE_COLUMNS,
};
use chrono::Datelike;
use feecalc_domain::entities::report::{FeeReport, FeeSummary, InstrumentBreakdown};
use feecalc_domain::repositories::report::ReportWriter;
use feecalc_domain::value_objects::enriched_trade::EnrichedTrade;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};
use std::fs;
use std::path::Path;

/// One workbook, three sheets. Nothing touches the disk until `save`.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for XlsxReportWriter {
    fn format_name(&self) -> &'static str {
        "xlsx"
    }

    fn write_report(&self, path: &Path, report: &FeeReport) -> Result<(), String> {
        let header = Format::new().set_bold();
        let date = Format::new().set_num_format("yyyy-mm-dd");
        let mut workbook = Workbook::new();

        write_trades_sheet(workbook.add_worksheet(), &report.trades, &header, &date)
            .map_err(|err| format!("failed to build {TRADES_SHEET} sheet: {err}"))?;
        write_summary_sheet(workbook.add_worksheet(), &report.summary, &header)
            .map_err(|err| format!("failed to build {SUMMARY_SHEET} sheet: {err}"))?;
        write_by_instrument_sheet(workbook.add_worksheet(), &report.by_instrument, &header)
            .map_err(|err| format!("failed to build {BY_INSTRUMENT_SHEET} sheet: {err}"))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    format!("failed to create report dir {}: {}", parent.display(), err)
                })?;
            }
        }
        workbook
            .save(path)
            .map_err(|err| format!("failed to write workbook {}: {}", path.display(), err))
    }
}

fn write_header(sheet: &mut Worksheet, columns: &[&str], header: &Format) -> Result<(), XlsxError> {
    for (col, name) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, header)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_trades_sheet(
    sheet: &mut Worksheet,
    trades: &[EnrichedTrade],
    header: &Format,
    date: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(TRADES_SHEET)?;
    write_header(sheet, &TRADE_COLUMNS, header)?;

    for (idx, trade) in trades.iter().enumerate() {
        let row = idx as u32 + 1;
        let record = &trade.record;
        let trade_date = ExcelDateTime::from_ymd(
            record.trade_date.year() as u16,
            record.trade_date.month() as u8,
            record.trade_date.day() as u8,
        )?;

        sheet.write_string(row, 0, record.trade_id.as_str())?;
        sheet.write_datetime_with_format(row, 1, &trade_date, date)?;
        sheet.write_string(row, 2, record.instrument.as_str())?;
        sheet.write_string(row, 3, record.side.as_str())?;
        sheet.write_number(row, 4, record.notional)?;
        sheet.write_number(row, 5, record.fee_rate)?;
        sheet.write_string(row, 6, record.fee_rate_type.as_str())?;
        sheet.write_number(row, 7, trade.fee_decimal)?;
        sheet.write_number(row, 8, trade.fee_amount)?;
        sheet.write_string(row, 9, trade.fee_direction.as_str())?;
    }

    sheet.autofit();
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    summary: &FeeSummary,
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(SUMMARY_SHEET)?;
    write_header(sheet, &SUMMARY_COLUMNS, header)?;

    for (idx, (metric, amount)) in summary.metric_rows().into_iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, metric)?;
        sheet.write_number(row, 1, amount)?;
    }

    sheet.autofit();
    Ok(())
}

fn write_by_instrument_sheet(
    sheet: &mut Worksheet,
    rows: &[InstrumentBreakdown],
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(BY_INSTRUMENT_SHEET)?;
    write_header(sheet, &BY_INSTRUMENT_COLUMNS, header)?;

    for (idx, breakdown) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, breakdown.instrument.as_str())?;
        sheet.write_number(row, 1, breakdown.trades as f64)?;
        sheet.write_number(row, 2, breakdown.total_notional)?;
        sheet.write_number(row, 3, breakdown.total_fees)?;
    }

    sheet.autofit();
    Ok(())
}
