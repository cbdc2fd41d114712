use super::models::sample::VerifiedSample;
use thiserror::Error;

/// Memory per core (MB) measured for B3LYP/6-31G** single points in Orca.
pub const REFERENCE_SAMPLES: [VerifiedSample; 7] = [
    VerifiedSample::new(24, 87.3),
    VerifiedSample::new(54, 223.5),
    VerifiedSample::new(96, 479.2),
    VerifiedSample::new(150, 882.1),
    VerifiedSample::new(216, 1516.5),
    VerifiedSample::new(294, 2464.7),
    VerifiedSample::new(384, 3841.8),
];

#[derive(Debug, Error, PartialEq, Clone)]
pub enum DatasetError {
    #[error("Verified dataset is empty")]
    Empty,

    #[error("Carbon counts must be strictly increasing: entry {index} ({current}) follows {previous}")]
    NotIncreasing {
        index: usize,
        previous: u32,
        current: u32,
    },

    #[error("Entry {index} has a carbon count of zero")]
    ZeroCarbonCount { index: usize },

    #[error("Entry {index} has a non-positive memory value: {memory_mb}")]
    NonPositiveMemory { index: usize, memory_mb: f64 },

    #[error("Entry {index} has a non-finite memory value: {memory_mb}")]
    NonFiniteMemory { index: usize, memory_mb: f64 },
}

/// An ordered table of verified samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDataset {
    samples: Vec<VerifiedSample>,
}

impl ReferenceDataset {
    pub fn new(samples: Vec<VerifiedSample>) -> Result<Self, DatasetError> {
        if samples.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (index, sample) in samples.iter().enumerate() {
            if sample.carbon_count == 0 {
                return Err(DatasetError::ZeroCarbonCount { index });
            }
            if !(sample.memory_mb > 0.0) {
                return Err(DatasetError::NonPositiveMemory {
                    index,
                    memory_mb: sample.memory_mb,
                });
            }
            if !sample.memory_mb.is_finite() {
                return Err(DatasetError::NonFiniteMemory {
                    index,
                    memory_mb: sample.memory_mb,
                });
            }
        }

        if let Some(index) = samples
            .windows(2)
            .position(|w| w[1].carbon_count <= w[0].carbon_count)
        {
            return Err(DatasetError::NotIncreasing {
                index: index + 1,
                previous: samples[index].carbon_count,
                current: samples[index + 1].carbon_count,
            });
        }

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[VerifiedSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The leading `count` entries used to seed the extrapolation.
    pub fn seeds(&self, count: usize) -> &[VerifiedSample] {
        &self.samples[..count.min(self.samples.len())]
    }

    pub fn memory_for(&self, carbon_count: u32) -> Option<f64> {
        self.samples
            .binary_search_by_key(&carbon_count, |s| s.carbon_count)
            .ok()
            .map(|i| self.samples[i].memory_mb)
    }
}

impl Default for ReferenceDataset {
    fn default() -> Self {
        Self {
            samples: REFERENCE_SAMPLES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dataset_holds_reference_table() {
        let dataset = ReferenceDataset::default();
        assert_eq!(dataset.len(), 7);
        assert_eq!(dataset.samples()[0], VerifiedSample::new(24, 87.3));
        assert_eq!(dataset.samples()[6], VerifiedSample::new(384, 3841.8));
    }

    #[test]
    fn default_dataset_passes_validation() {
        let validated = ReferenceDataset::new(REFERENCE_SAMPLES.to_vec()).unwrap();
        assert_eq!(validated, ReferenceDataset::default());
    }

    #[test]
    fn seeds_returns_leading_entries() {
        let dataset = ReferenceDataset::default();
        let seeds = dataset.seeds(3);
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[2].carbon_count, 96);
        assert_eq!(dataset.seeds(20).len(), 7);
    }

    #[test]
    fn memory_lookup_finds_known_carbon_counts() {
        let dataset = ReferenceDataset::default();
        assert_eq!(dataset.memory_for(150), Some(882.1));
        assert_eq!(dataset.memory_for(151), None);
    }

    #[test]
    fn new_rejects_empty_table() {
        assert_eq!(ReferenceDataset::new(vec![]), Err(DatasetError::Empty));
    }

    #[test]
    fn new_rejects_unsorted_table() {
        let result = ReferenceDataset::new(vec![
            VerifiedSample::new(54, 223.5),
            VerifiedSample::new(24, 87.3),
        ]);
        assert_eq!(
            result,
            Err(DatasetError::NotIncreasing {
                index: 1,
                previous: 54,
                current: 24
            })
        );
    }

    #[test]
    fn new_rejects_duplicate_carbon_counts() {
        let result = ReferenceDataset::new(vec![
            VerifiedSample::new(24, 87.3),
            VerifiedSample::new(24, 90.0),
        ]);
        assert!(matches!(result, Err(DatasetError::NotIncreasing { .. })));
    }

    #[test]
    fn new_rejects_zero_carbons_and_bad_memory() {
        assert_eq!(
            ReferenceDataset::new(vec![VerifiedSample::new(0, 1.0)]),
            Err(DatasetError::ZeroCarbonCount { index: 0 })
        );
        assert!(matches!(
            ReferenceDataset::new(vec![VerifiedSample::new(24, 87.3), VerifiedSample::new(54, 0.0)]),
            Err(DatasetError::NonPositiveMemory { index: 1, .. })
        ));
        assert!(matches!(
            ReferenceDataset::new(vec![VerifiedSample::new(24, f64::NAN)]),
            Err(DatasetError::NonPositiveMemory { index: 0, .. })
        ));
    }

    #[test]
    fn new_rejects_infinite_memory() {
        let result = ReferenceDataset::new(vec![
            VerifiedSample::new(24, 87.3),
            VerifiedSample::new(54, f64::INFINITY),
        ]);
        assert!(matches!(
            result,
            Err(DatasetError::NonFiniteMemory { index: 1, .. })
        ));
    }
}
