mod infra;
mod obs;

use clap::{Parser, ValueEnum};
use feecalc_application::config::{load_config, LogFormat};
use feecalc_application::fee_report::{generate_fee_report, FeeReportRequest};
use feecalc_application::meta::{tool_name, tool_version};
use feecalc_application::settings::{resolve, Overrides, RunSettings};
use feecalc_domain::value_objects::report_format::ReportFormat;
use feecalc_domain::value_objects::trade_side::TradeSide;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "feecalc")]
#[command(about = "Fee calculation tool: per-trade fees, summary and per-instrument report.", version)]
#[command(
    after_help = "Examples:\n  feecalc --input trades.csv\n  feecalc -i trades.csv -o report.xlsx --incoming-side Buy\n  feecalc -i trades.csv -o reports/fees --format csv --json\n"
)]
struct Cli {
    /// Input trades CSV (TradeID,TradeDate,Instrument,Side,Notional,FeeRate,FeeRateType).
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Report path [default: fee_report.xlsx].
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Which trade side is treated as incoming fees [default: Sell].
    #[arg(long, value_enum)]
    incoming_side: Option<IncomingSide>,

    /// Config file path (TOML). Explicit flags override its values.
    #[arg(long, env = "FEECALC_CONFIG")]
    config: Option<PathBuf>,

    /// Report format; detected from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Print summary and per-instrument breakdown as one JSON line on stdout.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log filter (overridden by env FEECALC_LOG) [default: info].
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format.
    #[arg(long, value_enum)]
    log_format: Option<LogOutput>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum IncomingSide {
    #[value(name = "Sell")]
    Sell,
    #[value(name = "Buy")]
    Buy,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Xlsx,
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogOutput {
    Text,
    Json,
}

impl Cli {
    fn into_overrides(self) -> (Overrides, Option<PathBuf>) {
        let overrides = Overrides {
            input: self.input,
            output: self.output,
            incoming_side: self.incoming_side.map(|side| match side {
                IncomingSide::Sell => TradeSide::Sell,
                IncomingSide::Buy => TradeSide::Buy,
            }),
            format: self.format.map(|format| match format {
                Format::Xlsx => ReportFormat::Xlsx,
                Format::Csv => ReportFormat::Csv,
            }),
            json_summary: self.json,
            log_level: self.log_level,
            log_format: self.log_format.map(|format| match format {
                LogOutput::Text => LogFormat::Text,
                LogOutput::Json => LogFormat::Json,
            }),
        };
        (overrides, self.config)
    }
}

fn main() {
    let cli = Cli::parse();
    let (overrides, config_path) = cli.into_overrides();

    let config = match config_path.as_deref().map(load_config).transpose() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let settings = resolve(overrides, config.as_ref());

    if let Err(err) = obs::init_tracing(&settings.log_level, settings.log_format) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    if let Err(err) = run(&settings, config_path.as_ref()) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(settings: &RunSettings, config_path: Option<&PathBuf>) -> Result<(), String> {
    let config_label = config_path
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "none".to_string());
    info!(
        tool = tool_name(),
        version = tool_version(),
        input = %settings.input.display(),
        output = %settings.output.display(),
        incoming_side = settings.incoming_side.label(),
        format = settings.format.as_str(),
        config = %config_label,
        "startup config"
    );

    let deps = infra::build_report_deps(settings.format);
    let outcome = generate_fee_report(
        &FeeReportRequest {
            input: &settings.input,
            output: &settings.output,
            incoming_side: settings.incoming_side,
        },
        deps.reader.as_ref(),
        deps.writer.as_ref(),
    )?;

    if settings.json_summary {
        let line = serde_json::to_string(&outcome.report.summary_json())
            .map_err(|err| format!("failed to serialize summary: {err}"))?;
        println!("{line}");
    }

    let resolved = std::fs::canonicalize(&outcome.output).unwrap_or(outcome.output);
    info!("Report written to {}", resolved.display());
    Ok(())
}
