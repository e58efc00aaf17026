use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kira_sepsisradar::input::load_records;
use kira_sepsisradar::logging::init_logging;
use kira_sepsisradar::model::thresholds::DEFAULT_TRIGGER_THRESHOLD;
use kira_sepsisradar::report::{
    RecordOutcome, ReportContext, ReportFormat, build_summary, write_reports,
};
use kira_sepsisradar::{
    EarlySepsisRadar, PatientRecord, VitalsSnapshot, calculate_news2, calculate_qsofa,
    evaluate_each, evaluate_many,
};

/// Deterministic early-warning sepsis radar
#[derive(Parser, Debug)]
#[command(name = "kira-sepsisradar", version)]
struct Cli {
    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a JSON batch of patient records and write reports
    Run(RunArgs),
    /// Print NEWS2 and qSOFA for a single set of vitals
    Conventional(VitalsArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// JSON array of records: {id?, note, vitals_trend, lab}
    #[arg(long)]
    input: PathBuf,

    /// Output directory for reports
    #[arg(long)]
    out: PathBuf,

    /// Risk score at or above which the radar triggers (0-1)
    #[arg(long, default_value_t = DEFAULT_TRIGGER_THRESHOLD, value_parser = parse_threshold)]
    threshold: f64,

    /// Reports to write
    #[arg(long, value_enum, default_value_t = ReportFormat::All)]
    format: ReportFormat,

    /// Report failing records instead of aborting the batch
    #[arg(long)]
    keep_going: bool,
}

#[derive(Args, Debug, Clone)]
struct VitalsArgs {
    /// Respiratory rate (breaths/min)
    #[arg(long)]
    rr: f64,
    /// Systolic blood pressure (mmHg)
    #[arg(long)]
    sbp: f64,
    /// Heart rate (bpm)
    #[arg(long)]
    hr: f64,
    /// Temperature (degrees Celsius)
    #[arg(long = "temp")]
    temp_c: f64,
    /// Peripheral oxygen saturation (%)
    #[arg(long)]
    spo2: f64,
    /// Altered mental status
    #[arg(long)]
    altered: bool,
}

impl VitalsArgs {
    fn to_snapshot(&self) -> VitalsSnapshot {
        VitalsSnapshot::new(self.rr, self.sbp, self.hr, self.temp_c, self.spo2)
            .with_altered_mental_status(self.altered)
    }
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.0..=1.0).contains(&v) {
        return Err("threshold must be within 0..=1".to_string());
    }
    Ok(v)
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run_batch(&args),
        Command::Conventional(args) => {
            let vitals = args.to_snapshot();
            println!("NEWS2: {}", calculate_news2(&vitals));
            println!("qSOFA: {}", calculate_qsofa(&vitals));
            Ok(())
        }
    }
}

fn run_batch(args: &RunArgs) -> Result<(), String> {
    let records = load_records(&args.input).map_err(|e| e.to_string())?;
    let radar = EarlySepsisRadar::new(args.threshold);

    let outcomes = evaluate_records(&radar, &records, args.keep_going)?;

    let summary = build_summary(&outcomes);
    tracing::info!(
        "{} of {} records triggered at threshold {}",
        summary.n_triggered,
        summary.n_evaluated,
        args.threshold
    );
    if summary.n_failed > 0 {
        tracing::warn!("{} records failed validation", summary.n_failed);
    }

    let ctx = ReportContext {
        tool_name: "kira-sepsisradar".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        threshold: args.threshold,
    };
    let written =
        write_reports(&outcomes, &ctx, &args.out, args.format).map_err(|e| e.to_string())?;
    for path in written {
        tracing::info!("wrote {}", path.display());
    }

    Ok(())
}

fn evaluate_records(
    radar: &EarlySepsisRadar,
    records: &[PatientRecord],
    keep_going: bool,
) -> Result<Vec<RecordOutcome>, String> {
    let ids = records
        .iter()
        .enumerate()
        .map(|(idx, record)| record.display_id(idx));

    if keep_going {
        let results = evaluate_each(radar, records);
        return Ok(ids
            .zip(results)
            .map(|(id, result)| RecordOutcome { id, result })
            .collect());
    }

    let results =
        evaluate_many(radar, records).map_err(|e| format!("batch aborted: {e}"))?;
    Ok(ids
        .zip(results)
        .map(|(id, result)| RecordOutcome {
            id,
            result: Ok(result),
        })
        .collect())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
