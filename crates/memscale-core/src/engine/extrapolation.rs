use crate::core::models::sample::{Sample, VerifiedSample};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ExtrapolationError {
    #[error("At least 2 seed samples are required to derive a percent change, found {found}")]
    InsufficientSeeds { found: usize },

    #[error("Seed sample {index} has a carbon count of zero")]
    ZeroCarbonCount { index: usize },

    #[error("Scaling coefficient {index} is zero and cannot be used as a divisor")]
    ZeroCoefficient { index: usize },

    #[error("Target carbon count at position {index} is zero")]
    ZeroTarget { index: usize },
}

/// The working sequence produced by [`extend`].
///
/// `samples` holds the seeds followed by the estimates in generation order.
/// `coefficients` has one entry per sample and `percent_changes` one entry per
/// consecutive pair of coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrapolation {
    samples: Vec<Sample>,
    coefficients: Vec<f64>,
    percent_changes: Vec<f64>,
    seed_count: usize,
}

impl Extrapolation {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn seeds(&self) -> &[Sample] {
        &self.samples[..self.seed_count]
    }

    pub fn estimated(&self) -> &[Sample] {
        &self.samples[self.seed_count..]
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn percent_changes(&self) -> &[f64] {
        &self.percent_changes
    }

    pub fn seed_count(&self) -> usize {
        self.seed_count
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn last_coefficient(&self) -> f64 {
        self.coefficients[self.coefficients.len() - 1]
    }

    fn last_percent_change(&self) -> f64 {
        self.percent_changes[self.percent_changes.len() - 1]
    }

    fn seed(seeds: &[VerifiedSample]) -> Result<Self, ExtrapolationError> {
        if seeds.len() < 2 {
            return Err(ExtrapolationError::InsufficientSeeds { found: seeds.len() });
        }
        if let Some(index) = seeds.iter().position(|s| s.carbon_count == 0) {
            return Err(ExtrapolationError::ZeroCarbonCount { index });
        }

        let coefficients: Vec<f64> = seeds
            .iter()
            .map(VerifiedSample::scaling_coefficient)
            .collect();

        let mut percent_changes = Vec::with_capacity(coefficients.len() - 1);
        for (index, pair) in coefficients.windows(2).enumerate() {
            percent_changes.push(percent_change(pair[0], pair[1], index)?);
        }

        Ok(Self {
            samples: seeds.iter().map(Sample::verified).collect(),
            coefficients,
            percent_changes,
            seed_count: seeds.len(),
        })
    }

    fn push_estimate(&mut self, carbon_count: u32) -> Result<(), ExtrapolationError> {
        let last_change = self.last_percent_change();
        let new_coefficient = self.last_coefficient() * (1.0 + last_change);
        let new_memory = new_coefficient * carbon_count as f64;

        self.samples.push(Sample::estimated(carbon_count, new_memory));
        self.coefficients.push(new_coefficient);

        // Reads the entry preceding the coefficient just appended.
        let previous_index = self.coefficients.len() - 2;
        let previous = self.coefficients[previous_index];
        self.percent_changes
            .push(percent_change(previous, new_coefficient, previous_index)?);

        trace!(
            carbon_count,
            new_coefficient,
            new_memory,
            last_change,
            "Appended estimated sample."
        );
        Ok(())
    }
}

fn percent_change(previous: f64, next: f64, index: usize) -> Result<f64, ExtrapolationError> {
    if previous == 0.0 {
        return Err(ExtrapolationError::ZeroCoefficient { index });
    }
    Ok((next - previous) / previous)
}

/// Extends `seeds` with one estimated sample per entry of `targets`.
///
/// The scaling coefficient (MB per carbon) of each new sample is the last
/// coefficient grown by the most recent percent change. Targets are processed
/// in the order given.
pub fn extend(
    seeds: &[VerifiedSample],
    targets: &[u32],
) -> Result<Extrapolation, ExtrapolationError> {
    extend_with(seeds, targets, |_| {})
}

/// Same as [`extend`], but invokes `on_step` after each estimate is appended.
pub fn extend_with<F>(
    seeds: &[VerifiedSample],
    targets: &[u32],
    mut on_step: F,
) -> Result<Extrapolation, ExtrapolationError>
where
    F: FnMut(&Sample),
{
    if let Some(index) = targets.iter().position(|&t| t == 0) {
        return Err(ExtrapolationError::ZeroTarget { index });
    }

    let mut extrapolation = Extrapolation::seed(seeds)?;
    debug!(
        seeds = seeds.len(),
        targets = targets.len(),
        "Seed coefficients: {:?}, percent changes: {:?}",
        extrapolation.coefficients,
        extrapolation.percent_changes
    );

    for &target in targets {
        extrapolation.push_estimate(target)?;
        if let Some(sample) = extrapolation.samples.last() {
            on_step(sample);
        }
    }

    Ok(extrapolation)
}
