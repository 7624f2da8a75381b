use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use flipdeck::models::Dataset;
use flipdeck::{content, datasets, storage};

#[derive(Parser, Debug)]
#[command(
    name = "flipdeck",
    version,
    about = "Validate post front matter & export chart-card datasets"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the front matter of every .md post in a directory.
    Check(CheckArgs),
    /// Export a built-in dataset's records to CSV or JSON.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Directory containing the post files.
    dir: PathBuf,
}

#[derive(ValueEnum, Clone, Debug)]
enum DatasetName {
    Engagement,
    Throughput,
    Traffic,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Which built-in dataset to export.
    #[arg(value_enum)]
    dataset: DatasetName,
    /// Output file (format inferred from extension unless --format is given).
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let report = content::check_dir(&args.dir)?;
    for (path, meta) in &report.ok {
        println!("ok   {}  {} • {}", path.display(), meta.title, meta.pub_date);
    }
    for (path, err) in &report.failed {
        println!("FAIL {}  {:#}", path.display(), err);
    }
    eprintln!(
        "Checked {} post(s): {} ok, {} failed",
        report.ok.len() + report.failed.len(),
        report.ok.len(),
        report.failed.len()
    );
    if !report.all_ok() {
        anyhow::bail!("{} post(s) failed validation", report.failed.len());
    }
    Ok(())
}

fn pick_dataset(name: &DatasetName) -> Dataset {
    match name {
        DatasetName::Engagement => datasets::engagement_trend(),
        DatasetName::Throughput => datasets::throughput_by_day(),
        DatasetName::Traffic => datasets::traffic_mix(),
    }
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let dataset = pick_dataset(&args.dataset);
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => args
            .out
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(&dataset, &args.out)?,
        "json" => storage::save_json(&dataset, &args.out)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!(
        "Saved {} records to {}",
        dataset.len(),
        args.out.display()
    );
    Ok(())
}
