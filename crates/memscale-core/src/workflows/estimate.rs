use crate::core::plot::chart::ChartData;
use crate::engine::config::StudyConfig;
use crate::engine::error::EngineError;
use crate::engine::extrapolation::{self, Extrapolation};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateResult {
    pub extrapolation: Extrapolation,
    pub chart: ChartData,
}

impl EstimateResult {
    /// Pairs each sample with the verified memory recorded for the same carbon
    /// count, when the reference table has one.
    pub fn with_verified(&self, config: &StudyConfig) -> Vec<Option<f64>> {
        self.extrapolation
            .samples()
            .iter()
            .map(|s| config.dataset.memory_for(s.carbon_count()))
            .collect()
    }
}

#[instrument(skip_all, name = "estimate_workflow")]
pub fn run(config: &StudyConfig, reporter: &ProgressReporter) -> Result<EstimateResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Extrapolation",
    });
    info!(
        seeds = config.seed_count,
        targets = config.targets.len(),
        "Extrapolating scaling coefficients."
    );

    reporter.report(Progress::TaskStart {
        total_steps: config.targets.len() as u64,
    });
    let extrapolation = extrapolation::extend_with(config.seeds(), &config.targets, |sample| {
        reporter.report(Progress::TaskIncrement);
        reporter.report(Progress::Message(format!(
            "{}: {:.1} MB",
            sample.label(),
            sample.memory_mb
        )));
    })?;
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let chart = ChartData::from_extrapolation(
        &extrapolation,
        &config.dataset,
        &config.palette,
        &config.chart,
    );

    info!(
        "Workflow complete. Produced {} estimated sample(s).",
        extrapolation.estimated().len()
    );
    Ok(EstimateResult {
        extrapolation,
        chart,
    })
}
