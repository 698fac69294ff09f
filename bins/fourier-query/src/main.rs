mod replay;

use clap::Parser;

use fourier_engine::config::QueryConfig;
use fourier_engine::runner::QueryRunner;
use fourier_engine::sink::Sink;
use replay::ReplaySource;

#[derive(Parser)]
#[command(name = "fourier-query", about = "Paginated time-series query runner")]
struct Cli {
    /// Recorded query responses (JSON), `-` for stdin.
    #[arg(long, default_value = "-", env = "FOURIER_INPUT")]
    input: String,

    /// Query text to submit with every page request.
    #[arg(long, default_value = "")]
    query: String,

    /// Write rendered output to this file in addition to the console.
    #[arg(long)]
    outputfile: Option<String>,

    /// Maximum-rows-per-page hint.
    #[arg(long, env = "FOURIER_MAX_ROWS")]
    max_rows: Option<u32>,

    /// Cancel the query with this identifier instead of running.
    #[arg(long)]
    cancel: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let source = match ReplaySource::from_path(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(input = %cli.input, error = %e, "failed to load recorded responses");
            std::process::exit(1);
        }
    };

    let mut runner = QueryRunner::new(source, QueryConfig { max_rows: cli.max_rows });

    if let Some(query_id) = cli.cancel.as_deref() {
        match runner.cancel(query_id) {
            Ok(()) => tracing::info!(query_id, "query cancelled"),
            Err(e) => {
                tracing::error!(query_id, error = %e, "cancellation failed");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut sink = match &cli.outputfile {
        Some(path) => match Sink::with_file(path) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "failed to open output file");
                std::process::exit(1);
            }
        },
        None => Sink::console(),
    };

    match runner.run(&cli.query, &mut sink) {
        Ok(stats) => {
            tracing::info!(pages = stats.pages, rows = stats.rows, "run complete");
        }
        Err(e) => {
            tracing::error!(error = %e, "query run failed");
            std::process::exit(1);
        }
    }
}
