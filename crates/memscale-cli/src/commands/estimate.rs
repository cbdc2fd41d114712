use crate::cli::EstimateArgs;
use crate::config::PartialStudyConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crate::utils::table;
use memscale::core::plot::render;
use memscale::engine::error::EngineError;
use memscale::engine::progress::ProgressReporter;
use memscale::workflows;
use tracing::info;

pub fn run(args: EstimateArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialStudyConfig::from_file(path)?,
        None => {
            info!("No configuration file given, using built-in study.");
            PartialStudyConfig::default()
        }
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the estimate workflow...");
    let result = workflows::estimate::run(&config, &reporter)?;

    print!("{}", table::format_summary(&result, &config));

    if args.no_chart {
        info!("Chart rendering skipped.");
        return Ok(());
    }

    render::render_to_file(&result.chart, &args.output)
        .map_err(|source| CliError::Engine(EngineError::Render { source }))?;
    println!("✓ Chart written to: {}", args.output.display());

    Ok(())
}
