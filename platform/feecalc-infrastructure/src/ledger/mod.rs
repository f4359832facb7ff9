use chrono::{DateTime, NaiveDate, NaiveDateTime};
use feecalc_domain::repositories::ledger::TradeLedgerReader;
use feecalc_domain::value_objects::trade_record::TradeRecord;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct LedgerRow {
    #[serde(rename = "TradeID")]
    trade_id: String,
    #[serde(rename = "TradeDate")]
    trade_date: String,
    #[serde(rename = "Instrument")]
    instrument: String,
    #[serde(rename = "Side")]
    side: String,
    #[serde(rename = "Notional")]
    notional: f64,
    #[serde(rename = "FeeRate")]
    fee_rate: f64,
    #[serde(rename = "FeeRateType")]
    fee_rate_type: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvTradeLedgerReader;

impl CsvTradeLedgerReader {
    pub fn new() -> Self {
        Self
    }
}

impl TradeLedgerReader for CsvTradeLedgerReader {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_trades(&self, path: &Path) -> Result<Vec<TradeRecord>, String> {
        load_csv(path)
    }
}

/// Reads the whole ledger; the first malformed row aborts the load.
pub fn load_csv(path: &Path) -> Result<Vec<TradeRecord>, String> {
    let file = File::open(path)
        .map_err(|err| format!("failed to open trades CSV {}: {}", path.display(), err))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<LedgerRow>().enumerate() {
        let row = result.map_err(|err| {
            format!("failed to parse trades CSV {}: {}", path.display(), err)
        })?;
        let trade_date = parse_trade_date(&row.trade_date).map_err(|err| {
            format!(
                "failed to parse trades CSV {}: row {} (TradeID={}): {}",
                path.display(),
                idx + 1,
                row.trade_id,
                err
            )
        })?;
        records.push(TradeRecord {
            trade_id: row.trade_id,
            trade_date,
            instrument: row.instrument,
            side: row.side,
            notional: row.notional,
            fee_rate: row.fee_rate,
            fee_rate_type: row.fee_rate_type,
        });
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "trades CSV loaded");
    Ok(records)
}

pub fn parse_trade_date(value: &str) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    for fmt in [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%b-%Y",
        "%d %b %Y",
        "%b %d, %Y",
    ] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(naive.date());
        }
    }

    Err(format!("unsupported TradeDate format: '{value}'"))
}
