use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use batcher::prelude::*;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays a clean CSV report
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let strategy = match parse_args(std::env::args().collect()) {
        Ok(strategy) => strategy,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    CliApp::new("batcher")
        .run(move |writer| run_strategy(writer, strategy))
        .await
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<Strategy, AppError> {
    if args.len() != 2 {
        return Err(AppError::InvalidArguments(
            "Usage: batcher <sequential|parallel|batched>".to_string(),
        ));
    }
    Strategy::from_str(&args[1])
}

/// Main application logic - runs the chosen strategy and writes the report
async fn run_strategy(
    mut writer: tokio::io::BufWriter<tokio::io::Stdout>,
    strategy: Strategy,
) -> Result<(), AppError> {
    let items = DummyGenerator::new().generate();
    let processor = SimulatedProcessor::with_defaults();

    let report = match strategy {
        Strategy::Sequential => run_sequential(&processor, items).await,
        Strategy::Parallel => run_parallel(Arc::new(processor), items).await,
        Strategy::Batched => BatchDispatcher::new(processor).run(items).await,
    };

    info!(
        job_id = %report.summary.job_id,
        strategy = ?strategy,
        items = report.summary.total_items,
        errors = report.summary.error_count,
        elapsed_ms = report.summary.elapsed.as_millis() as u64,
        "run finished"
    );

    write_report(&report, &mut writer).await?;

    Ok(())
}
