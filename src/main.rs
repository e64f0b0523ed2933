use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use outfit_rater::config::Configuration;
use outfit_rater::error::AppError;
use outfit_rater::pipeline::{open_journal, AnalyzerBuilder, PipelineOrchestrator};
use tower::ServiceExt;
use tracing::{error, info, Level};

fn init_logging(log_level: &str) {
    let level = log_level.parse::<Level>().unwrap_or(Level::INFO);
    // stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut args = std::env::args().skip(1);
    let image_path = args.next().map(PathBuf::from).ok_or_else(|| {
        AppError::Usage("outfit-rater <image-path> [config-file]".to_string())
    })?;
    let config_path = args.next().map(PathBuf::from);

    let configuration = Configuration::load(config_path.as_deref())?;
    init_logging(&configuration.log_level);

    let journal = open_journal(&configuration.journal).await;
    let orchestrator = PipelineOrchestrator::new(&configuration.analysis).with_journal(journal);

    let mut builder = AnalyzerBuilder::new(orchestrator);
    if let Some(timeout_ms) = configuration.analyzer_timeout_ms {
        builder = builder.analyzer_timeout(Duration::from_millis(timeout_ms));
    }
    let analyzer = builder.build();

    let bytes = tokio::fs::read(&image_path).await.map_err(AppError::from)?;
    info!("Analyzing {} ({} bytes)", image_path.display(), bytes.len());

    let result = analyzer.oneshot(bytes).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may not be initialized yet when configuration fails
            if tracing::dispatcher::has_been_set() {
                error!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
