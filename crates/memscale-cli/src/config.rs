use crate::cli::EstimateArgs;
use crate::error::{CliError, Result};
use memscale::core::dataset::ReferenceDataset;
use memscale::core::models::sample::VerifiedSample;
use memscale::core::palette::{DEFAULT_PALETTE, Palette};
use memscale::engine::config::{self as core_config, ChartOptions, StudyConfigBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialStudySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    targets: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    palette: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialChartConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
}

/// The study configuration as written in a TOML file. Every field is optional;
/// missing values fall back to the built-in defaults.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialStudyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    study: Option<PartialStudySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<PartialChartConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<Vec<VerifiedSample>>,
}

impl PartialStudyConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The built-in study with every field filled in.
    pub fn defaults() -> Self {
        let chart = ChartOptions::default();
        Self {
            study: Some(PartialStudySection {
                seed_count: Some(core_config::DEFAULT_SEED_COUNT),
                targets: Some(core_config::DEFAULT_TARGETS.to_vec()),
                palette: Some(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()),
            }),
            chart: Some(PartialChartConfig {
                title: Some(chart.title),
                x_label: Some(chart.x_label),
                y_label: Some(chart.y_label),
                width: Some(chart.width),
                height: Some(chart.height),
            }),
            verified: Some(ReferenceDataset::default().samples().to_vec()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    pub fn merge_with_cli(mut self, args: &EstimateArgs) -> Result<core_config::StudyConfig> {
        self.apply_set_values(&args.set_values)?;

        let study = self.study.take().unwrap_or_default();
        let chart = self.chart.take().unwrap_or_default();

        let mut builder = StudyConfigBuilder::new();

        if let Some(verified) = self.verified.take() {
            let dataset = ReferenceDataset::new(verified)
                .map_err(|e| CliError::Config(format!("Invalid [[verified]] table: {}", e)))?;
            builder = builder.dataset(dataset);
        }
        if let Some(seed_count) = args.seed_count.or(study.seed_count) {
            builder = builder.seed_count(seed_count);
        }
        if let Some(targets) = args.targets.clone().or(study.targets) {
            builder = builder.targets(targets);
        }
        if let Some(codes) = study.palette {
            let palette = Palette::parse(&codes)
                .map_err(|e| CliError::Config(format!("Invalid `study.palette`: {}", e)))?;
            builder = builder.palette(palette);
        }
        builder = builder.chart(Self::merge_chart(chart));

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_chart(partial: PartialChartConfig) -> ChartOptions {
        let defaults = ChartOptions::default();
        ChartOptions {
            title: partial.title.unwrap_or(defaults.title),
            x_label: partial.x_label.unwrap_or(defaults.x_label),
            y_label: partial.y_label.unwrap_or(defaults.y_label),
            width: partial.width.unwrap_or(defaults.width),
            height: partial.height.unwrap_or(defaults.height),
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let invalid = |kind: &str| {
                CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
            };

            match key {
                "study.seed-count" => {
                    self.study.get_or_insert_with(Default::default).seed_count =
                        Some(value_str.parse().map_err(|_| invalid("integer"))?);
                }
                "study.targets" => {
                    let targets = value_str
                        .split(',')
                        .map(|t| t.trim().parse::<u32>())
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .map_err(|_| invalid("integer list"))?;
                    self.study.get_or_insert_with(Default::default).targets = Some(targets);
                }
                "chart.title" => {
                    self.chart.get_or_insert_with(Default::default).title =
                        Some(value_str.to_string());
                }
                "chart.width" => {
                    self.chart.get_or_insert_with(Default::default).width =
                        Some(value_str.parse().map_err(|_| invalid("integer"))?);
                }
                "chart.height" => {
                    self.chart.get_or_insert_with(Default::default).height =
                        Some(value_str.parse().map_err(|_| invalid("integer"))?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
