use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vacancies::{
    config::{parse_delimiter, DEFAULT_INPUT, DEFAULT_OUTPUT},
    process::DEFAULT_MUNICIPALITY,
    PipelineConfig,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Clean a job-vacancy export and count postings per title and per date"
)]
struct Args {
    /// Source export, header on the first line
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Cleaned table destination
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Field delimiter of the source export
    #[arg(long, default_value = ";", value_parser = parse_delimiter)]
    delimiter: u8,
    /// Field delimiter of the cleaned table
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    output_delimiter: u8,
    /// Keep only postings in this municipality (exact match)
    #[arg(short, long, default_value = DEFAULT_MUNICIPALITY)]
    municipality: String,
    /// Also write the cleaned table as Parquet
    #[arg(long)]
    parquet: Option<PathBuf>,
    /// Write chart-ready aggregates as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        PipelineConfig {
            input: args.input,
            input_delimiter: args.delimiter,
            output: args.output,
            output_delimiter: args.output_delimiter,
            municipality: args.municipality,
            parquet: args.parquet,
            report: args.report,
        }
    }
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) config ───────────────────────────────────────────────────
    let config = PipelineConfig::from(Args::parse());
    info!(?config, "startup");

    // ─── 3) run ──────────────────────────────────────────────────────
    let outcome = vacancies::run(&config)
        .with_context(|| format!("pipeline failed for {}", config.input.display()))?;

    // ─── 4) summary for the plotting side ────────────────────────────
    println!("Postings per job title ({}):", config.municipality);
    for (title, n) in outcome.by_title.ranked() {
        println!("  {n:>3}  {title}");
    }
    println!("Postings per publication date:");
    for (date, n) in outcome.by_date.iter() {
        println!("  {date}  {n}");
    }

    info!(
        loaded = outcome.loaded.len(),
        cleaned = outcome.cleaned.len(),
        output = %config.output.display(),
        "all done"
    );
    Ok(())
}
