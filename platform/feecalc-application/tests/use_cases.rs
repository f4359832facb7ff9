use chrono::NaiveDate;
use feecalc_application::fee_report::{generate_fee_report, FeeReportRequest};
use feecalc_domain::entities::report::FeeReport;
use feecalc_domain::repositories::ledger::TradeLedgerReader;
use feecalc_domain::repositories::report::ReportWriter;
use feecalc_domain::value_objects::fee_direction::FeeDirection;
use feecalc_domain::value_objects::trade_record::TradeRecord;
use feecalc_domain::value_objects::trade_side::TradeSide;
use feecalc_infrastructure::ledger::CsvTradeLedgerReader;
use feecalc_infrastructure::reporting::csv_dir::CsvDirReportWriter;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Default)]
struct FakeLedger {
    present: bool,
    records: Vec<TradeRecord>,
    reads: Cell<usize>,
}

impl TradeLedgerReader for FakeLedger {
    fn exists(&self, _path: &Path) -> bool {
        self.present
    }

    fn read_trades(&self, _path: &Path) -> Result<Vec<TradeRecord>, String> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.records.clone())
    }
}

struct FailingLedger;

impl TradeLedgerReader for FailingLedger {
    fn exists(&self, _path: &Path) -> bool {
        true
    }

    fn read_trades(&self, path: &Path) -> Result<Vec<TradeRecord>, String> {
        Err(format!(
            "failed to parse trades CSV {}: field 5: invalid float literal",
            path.display()
        ))
    }
}

#[derive(Default)]
struct RecordingWriter {
    written: RefCell<Vec<(PathBuf, FeeReport)>>,
}

impl ReportWriter for RecordingWriter {
    fn format_name(&self) -> &'static str {
        "memory"
    }

    fn write_report(&self, path: &Path, report: &FeeReport) -> Result<(), String> {
        self.written
            .borrow_mut()
            .push((path.to_path_buf(), report.clone()));
        Ok(())
    }
}

fn record(id: &str, instrument: &str, side: &str, notional: f64, rate: f64, kind: &str) -> TradeRecord {
    TradeRecord {
        trade_id: id.to_string(),
        trade_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
        instrument: instrument.to_string(),
        side: side.to_string(),
        notional,
        fee_rate: rate,
        fee_rate_type: kind.to_string(),
    }
}

fn unique_tmp_dir(prefix: &str) -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir().join(format!("feecalc_{prefix}_{}_{}", std::process::id(), now))
}

#[test]
fn two_row_ledger_produces_balanced_report() {
    let ledger = FakeLedger {
        present: true,
        records: vec![
            record("A", "X", "Sell", 1000.0, 10.0, "bps"),
            record("B", "X", "Buy", 500.0, 0.2, "pct"),
        ],
        ..FakeLedger::default()
    };
    let writer = RecordingWriter::default();

    let outcome = generate_fee_report(
        &FeeReportRequest {
            input: Path::new("trades.csv"),
            output: Path::new("fee_report.xlsx"),
            incoming_side: TradeSide::Sell,
        },
        &ledger,
        &writer,
    )
    .expect("report");

    assert_eq!(outcome.output, PathBuf::from("fee_report.xlsx"));
    let report = &outcome.report;
    assert_eq!(report.trades.len(), 2);
    assert!((report.trades[0].fee_decimal - 0.001).abs() < 1e-15);
    assert_eq!(report.trades[0].fee_direction, FeeDirection::Incoming);
    assert!((report.trades[1].fee_decimal - 0.002).abs() < 1e-15);
    assert_eq!(report.trades[1].fee_direction, FeeDirection::Outgoing);
    assert!((report.summary.total_incoming - 1.0).abs() < 1e-12);
    assert!((report.summary.total_outgoing - 1.0).abs() < 1e-12);
    assert!(report.summary.net.abs() < 1e-12);
    assert_eq!(report.by_instrument.len(), 1);
    assert_eq!(report.by_instrument[0].trades, 2);
    assert_eq!(report.by_instrument[0].total_notional, 1500.0);
    assert!((report.by_instrument[0].total_fees - 2.0).abs() < 1e-12);

    let written = writer.written.borrow();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].0, PathBuf::from("fee_report.xlsx"));
    assert_eq!(&written[0].1, report);
}

#[test]
fn incoming_side_buy_flips_directions() {
    let ledger = FakeLedger {
        present: true,
        records: vec![
            record("A", "X", "Sell", 1000.0, 10.0, "bps"),
            record("B", "X", "Buy", 500.0, 0.4, "pct"),
        ],
        ..FakeLedger::default()
    };
    let writer = RecordingWriter::default();

    let outcome = generate_fee_report(
        &FeeReportRequest {
            input: Path::new("trades.csv"),
            output: Path::new("out"),
            incoming_side: TradeSide::Buy,
        },
        &ledger,
        &writer,
    )
    .expect("report");

    assert!((outcome.report.summary.total_incoming - 2.0).abs() < 1e-12);
    assert!((outcome.report.summary.total_outgoing - 1.0).abs() < 1e-12);
    assert!((outcome.report.summary.net - 1.0).abs() < 1e-12);
}

#[test]
fn empty_ledger_writes_zero_summary() {
    let ledger = FakeLedger {
        present: true,
        ..FakeLedger::default()
    };
    let writer = RecordingWriter::default();

    let outcome = generate_fee_report(
        &FeeReportRequest {
            input: Path::new("empty.csv"),
            output: Path::new("fee_report.xlsx"),
            incoming_side: TradeSide::Sell,
        },
        &ledger,
        &writer,
    )
    .expect("report");

    assert_eq!(outcome.report.summary.total_incoming, 0.0);
    assert_eq!(outcome.report.summary.total_outgoing, 0.0);
    assert_eq!(outcome.report.summary.net, 0.0);
    assert!(outcome.report.by_instrument.is_empty());
    assert_eq!(writer.written.borrow().len(), 1);
}

#[test]
fn missing_input_fails_without_reading_or_writing() {
    let ledger = FakeLedger::default();
    let writer = RecordingWriter::default();

    let err = generate_fee_report(
        &FeeReportRequest {
            input: Path::new("missing.csv"),
            output: Path::new("fee_report.xlsx"),
            incoming_side: TradeSide::Sell,
        },
        &ledger,
        &writer,
    )
    .err()
    .expect("missing input should fail");

    assert!(err.contains("missing.csv"));
    assert!(err.contains("does not exist"));
    assert_eq!(ledger.reads.get(), 0);
    assert!(writer.written.borrow().is_empty());
}

#[test]
fn malformed_ledger_aborts_before_writing() {
    let writer = RecordingWriter::default();
    let err = generate_fee_report(
        &FeeReportRequest {
            input: Path::new("bad.csv"),
            output: Path::new("fee_report.xlsx"),
            incoming_side: TradeSide::Sell,
        },
        &FailingLedger,
        &writer,
    )
    .err()
    .expect("malformed input should fail");

    assert!(err.contains("invalid float literal"));
    assert!(writer.written.borrow().is_empty());
}

#[test]
fn filesystem_round_trip_writes_csv_report() {
    let dir = unique_tmp_dir("use_case_fs");
    fs::create_dir_all(&dir).expect("tmp dir");
    let input = dir.join("trades.csv");
    fs::write(
        &input,
        "TradeID,TradeDate,Instrument,Side,Notional,FeeRate,FeeRateType\n\
1,2024-01-15,X,Sell,1000,10,bps\n\
2,2024-01-16,X,Buy,500,0.2,pct\n\
3,2024-01-16,Y,Cover,200,0.005,Decimal\n",
    )
    .expect("write input");
    let output = dir.join("report");

    let outcome = generate_fee_report(
        &FeeReportRequest {
            input: &input,
            output: &output,
            incoming_side: TradeSide::Sell,
        },
        &CsvTradeLedgerReader::new(),
        &CsvDirReportWriter::new(),
    )
    .expect("report");

    assert_eq!(outcome.report.trades.len(), 3);
    assert!((outcome.report.summary.total_outgoing - 2.0).abs() < 1e-12);
    assert!(output.join("trades_with_fees.csv").exists());
    assert!(output.join("summary.csv").exists());
    assert!(output.join("by_instrument.csv").exists());
}

#[test]
fn filesystem_missing_input_creates_no_output() {
    let dir = unique_tmp_dir("use_case_missing");
    let output = dir.join("fee_report");

    let result = generate_fee_report(
        &FeeReportRequest {
            input: &dir.join("nope.csv"),
            output: &output,
            incoming_side: TradeSide::Sell,
        },
        &CsvTradeLedgerReader::new(),
        &CsvDirReportWriter::new(),
    );

    assert!(result.is_err());
    assert!(!output.exists());
}
