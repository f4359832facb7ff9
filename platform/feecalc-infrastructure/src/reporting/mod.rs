pub mod csv_dir;
pub mod xlsx;

use feecalc_domain::repositories::report::ReportWriter;
use feecalc_domain::value_objects::enriched_trade::EnrichedTrade;
use feecalc_domain::value_objects::report_format::ReportFormat;

pub const TRADES_SHEET: &str = "trades_with_fees";
pub const SUMMARY_SHEET: &str = "summary";
pub const BY_INSTRUMENT_SHEET: &str = "by_instrument";

pub const TRADE_COLUMNS: [&str; 10] = [
    "TradeID",
    "TradeDate",
    "Instrument",
    "Side",
    "Notional",
    "FeeRate",
    "FeeRateType",
    "fee_decimal",
    "FeeAmount",
    "FeeDirection",
];
pub const SUMMARY_COLUMNS: [&str; 2] = ["Metric", "Amount"];
pub const BY_INSTRUMENT_COLUMNS: [&str; 4] = ["Instrument", "Trades", "TotalNotional", "TotalFees"];

pub fn report_writer_for(format: ReportFormat) -> Box<dyn ReportWriter> {
    match format {
        ReportFormat::Xlsx => Box::new(xlsx::XlsxReportWriter::new()),
        ReportFormat::Csv => Box::new(csv_dir::CsvDirReportWriter::new()),
    }
}

/// Text cells of a trade row, in `TRADE_COLUMNS` order.
pub(crate) fn trade_row_strings(trade: &EnrichedTrade) -> [String; 10] {
    [
        trade.record.trade_id.clone(),
        trade.record.trade_date.format("%Y-%m-%d").to_string(),
        trade.record.instrument.clone(),
        trade.record.side.clone(),
        trade.record.notional.to_string(),
        trade.record.fee_rate.to_string(),
        trade.record.fee_rate_type.clone(),
        trade.fee_decimal.to_string(),
        trade.fee_amount.to_string(),
        trade.fee_direction.as_str().to_string(),
    ]
}
