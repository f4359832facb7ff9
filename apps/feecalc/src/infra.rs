use feecalc_domain::repositories::ledger::TradeLedgerReader;
use feecalc_domain::repositories::report::ReportWriter;
use feecalc_domain::value_objects::report_format::ReportFormat;
use feecalc_infrastructure::ledger::CsvTradeLedgerReader;
use feecalc_infrastructure::reporting::report_writer_for;

pub struct ReportDeps {
    pub reader: Box<dyn TradeLedgerReader>,
    pub writer: Box<dyn ReportWriter>,
}

pub fn build_report_deps(format: ReportFormat) -> ReportDeps {
    ReportDeps {
        reader: Box::new(CsvTradeLedgerReader::new()),
        writer: report_writer_for(format),
    }
}
