use crate::core::dataset::{DatasetError, ReferenceDataset};
use crate::core::models::sample::VerifiedSample;
use crate::core::palette::{Palette, PaletteError};
use thiserror::Error;

pub const DEFAULT_SEED_COUNT: usize = 3;
pub const DEFAULT_TARGETS: [u32; 4] = [150, 216, 294, 384];
pub const DEFAULT_TITLE: &str = "B3LYP/6-31G** - Orca";
pub const DEFAULT_X_LABEL: &str = "Carbon atom count";
pub const DEFAULT_Y_LABEL: &str = "Memory per core (MB)";
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1200, 600);

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Seed count must be at least 2, got {0}")]
    SeedCountTooSmall(usize),

    #[error("Seed count {seed_count} exceeds the {available} verified samples available")]
    SeedCountTooLarge { seed_count: usize, available: usize },

    #[error("Target carbon counts must be positive")]
    ZeroTarget,

    #[error("Chart dimensions must be non-zero, got {width}x{height}")]
    InvalidChartSize { width: u32, height: u32 },

    #[error("Invalid verified dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            width: DEFAULT_CHART_SIZE.0,
            height: DEFAULT_CHART_SIZE.1,
        }
    }
}

/// Everything a single estimation run needs, fixed before the run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    pub dataset: ReferenceDataset,
    pub seed_count: usize,
    pub targets: Vec<u32>,
    pub palette: Palette,
    pub chart: ChartOptions,
}

impl StudyConfig {
    pub fn seeds(&self) -> &[VerifiedSample] {
        self.dataset.seeds(self.seed_count)
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            dataset: ReferenceDataset::default(),
            seed_count: DEFAULT_SEED_COUNT,
            targets: DEFAULT_TARGETS.to_vec(),
            palette: Palette::default(),
            chart: ChartOptions::default(),
        }
    }
}

#[derive(Default)]
pub struct StudyConfigBuilder {
    dataset: Option<ReferenceDataset>,
    seed_count: Option<usize>,
    targets: Option<Vec<u32>>,
    palette: Option<Palette>,
    chart: Option<ChartOptions>,
}

impl StudyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(mut self, dataset: ReferenceDataset) -> Self {
        self.dataset = Some(dataset);
        self
    }
    pub fn seed_count(mut self, count: usize) -> Self {
        self.seed_count = Some(count);
        self
    }
    pub fn targets(mut self, targets: Vec<u32>) -> Self {
        self.targets = Some(targets);
        self
    }
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
    pub fn chart(mut self, chart: ChartOptions) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn build(self) -> Result<StudyConfig, ConfigError> {
        let dataset = self.dataset.unwrap_or_default();
        let seed_count = self.seed_count.unwrap_or(DEFAULT_SEED_COUNT);
        if seed_count < 2 {
            return Err(ConfigError::SeedCountTooSmall(seed_count));
        }
        if seed_count > dataset.len() {
            return Err(ConfigError::SeedCountTooLarge {
                seed_count,
                available: dataset.len(),
            });
        }

        let targets = self.targets.unwrap_or_else(|| DEFAULT_TARGETS.to_vec());
        if targets.contains(&0) {
            return Err(ConfigError::ZeroTarget);
        }

        let chart = self.chart.unwrap_or_default();
        if chart.width == 0 || chart.height == 0 {
            return Err(ConfigError::InvalidChartSize {
                width: chart.width,
                height: chart.height,
            });
        }

        Ok(StudyConfig {
            dataset,
            seed_count,
            targets,
            palette: self.palette.unwrap_or_default(),
            chart,
        })
    }
}
