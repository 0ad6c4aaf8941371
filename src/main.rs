use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use payrun::error::Result;
use payrun::logging;
use payrun::pipeline::ingestion;
use payrun::pipeline::processing::aggregate;
use payrun::reports::ReportRunner;

#[derive(Parser)]
#[command(name = "payrun")]
#[command(about = "Payroll report generator for CSV/JSON employee data")]
#[command(after_help = "Example: payrun data1.csv data2.json --report payout")]
#[command(version = "0.1.0")]
struct Cli {
    /// Employee data files (CSV or JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Report to generate. Available: payout, average_hourly_rate
    #[arg(long)]
    report: String,
}

fn run(cli: &Cli) -> Result<String> {
    let records = ingestion::normalize_files(&cli.files)?;
    let records = aggregate::sort_by_id(records)?;
    ReportRunner::new().run(&cli.report, &records)
}

fn main() -> ExitCode {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("report run failed: {e}");
            eprintln!("An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}
