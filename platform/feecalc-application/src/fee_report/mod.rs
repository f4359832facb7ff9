use feecalc_domain::entities::report::FeeReport;
use feecalc_domain::repositories::ledger::TradeLedgerReader;
use feecalc_domain::repositories::report::ReportWriter;
use feecalc_domain::services::aggregation::build_report;
use feecalc_domain::value_objects::trade_side::TradeSide;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, info_span};

pub struct FeeReportRequest<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub incoming_side: TradeSide,
}

pub struct FeeReportOutcome {
    pub output: PathBuf,
    pub report: FeeReport,
}

/// read -> compute -> aggregate -> write. A missing input is reported
/// before anything is read or written.
pub fn generate_fee_report(
    request: &FeeReportRequest<'_>,
    reader: &dyn TradeLedgerReader,
    writer: &dyn ReportWriter,
) -> Result<FeeReportOutcome, String> {
    let _span = info_span!(
        "generate_fee_report",
        input = %request.input.display(),
        output = %request.output.display(),
    )
    .entered();

    if !reader.exists(request.input) {
        return Err(format!(
            "input file {} does not exist",
            request.input.display()
        ));
    }

    let stage_start = Instant::now();
    let records = reader.read_trades(request.input)?;
    debug!(
        rows = records.len(),
        elapsed_ms = stage_start.elapsed().as_millis() as u64,
        "ledger loaded"
    );

    let report = build_report(records, request.incoming_side);
    debug!(
        trades = report.trades.len(),
        instruments = report.by_instrument.len(),
        incoming_side = request.incoming_side.label(),
        "fees computed"
    );

    writer.write_report(request.output, &report)?;
    info!(
        format = writer.format_name(),
        trades = report.trades.len(),
        total_incoming = report.summary.total_incoming,
        total_outgoing = report.summary.total_outgoing,
        net = report.summary.net,
        "report written"
    );

    Ok(FeeReportOutcome {
        output: request.output.to_path_buf(),
        report,
    })
}
