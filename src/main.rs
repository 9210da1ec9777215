use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scoreline", about = "Cumulative best-score charts from a submission log")]
struct Cli {
    /// Config file (defaults to ./scoreline.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Submission log to read, overriding `report.log_path`.
    #[arg(long)]
    log: Option<PathBuf>,
    /// Directory charts are written to, overriding `report.output_dir`.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = scoreline_core::config::Config::load(cli.config.as_deref())?;
    if let Some(log) = cli.log {
        config.report.log_path = log;
    }
    if let Some(out) = cli.out {
        config.report.output_dir = out;
    }

    let report = scoreline::run(&config)?;

    print!("{}", scoreline_core::standings::render_table(&report.standings));
    println!("\nAll teams chart: {}", report.combined_chart.display());
    Ok(())
}
