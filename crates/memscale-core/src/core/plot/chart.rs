use crate::core::dataset::ReferenceDataset;
use crate::core::palette::{Palette, Rgb};
use crate::engine::config::ChartOptions;
use crate::engine::extrapolation::Extrapolation;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub carbon_count: u32,
    pub memory_mb: f64,
    pub label: String,
    pub color: Rgb,
}

/// Everything the renderer needs to draw a study.
///
/// Points are the seeds followed by the estimates; `verified_end` is the index
/// of the first estimated point. The reference line holds the verified table
/// from the last seed onward.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    points: Vec<ChartPoint>,
    verified_end: usize,
    reference: Vec<(u32, f64)>,
    options: ChartOptions,
}

impl ChartData {
    pub fn from_extrapolation(
        extrapolation: &Extrapolation,
        dataset: &ReferenceDataset,
        palette: &Palette,
        options: &ChartOptions,
    ) -> Self {
        let points = extrapolation
            .samples()
            .iter()
            .enumerate()
            .map(|(i, sample)| ChartPoint {
                carbon_count: sample.carbon_count(),
                memory_mb: sample.memory_mb,
                label: sample.label(),
                color: palette.color_for(i),
            })
            .collect();

        let verified_end = extrapolation.seed_count();
        let reference = dataset
            .samples()
            .iter()
            .skip(verified_end.saturating_sub(1))
            .map(|s| (s.carbon_count, s.memory_mb))
            .collect();

        Self {
            points,
            verified_end,
            reference,
            options: options.clone(),
        }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn counts(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.carbon_count).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.memory_mb).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn verified_end(&self) -> usize {
        self.verified_end
    }

    pub fn reference(&self) -> &[(u32, f64)] {
        &self.reference
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Start indices of the solid segments joining consecutive seed points.
    pub fn solid_segments(&self) -> Range<usize> {
        0..self.verified_end.saturating_sub(1).min(self.points.len().saturating_sub(1))
    }

    /// Start indices of the dashed segments running from the last seed through
    /// the estimates.
    pub fn dashed_segments(&self) -> Range<usize> {
        self.solid_segments().end..self.points.len().saturating_sub(1)
    }

    /// Polyline through the seed points.
    pub fn seed_line(&self) -> Vec<(f64, f64)> {
        self.polyline(0..self.solid_segments().end + 1)
    }

    /// Polyline from the last seed through the estimates. Empty when there is
    /// nothing to dash.
    pub fn estimate_line(&self) -> Vec<(f64, f64)> {
        let dashed = self.dashed_segments();
        if dashed.is_empty() {
            return Vec::new();
        }
        self.polyline(dashed.start..dashed.end + 1)
    }

    fn polyline(&self, range: Range<usize>) -> Vec<(f64, f64)> {
        self.points[range.start.min(self.points.len())..range.end.min(self.points.len())]
            .iter()
            .map(|p| (p.carbon_count as f64, p.memory_mb))
            .collect()
    }

    /// Label of the first point, or carbon count of the first reference entry,
    /// whose memory value is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<String> {
        self.points
            .iter()
            .find(|p| !p.memory_mb.is_finite())
            .map(|p| p.label.clone())
            .or_else(|| {
                self.reference
                    .iter()
                    .find(|(_, m)| !m.is_finite())
                    .map(|(c, _)| format!("C{c} (verified)"))
            })
    }

    pub fn x_max(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.carbon_count)
            .chain(self.reference.iter().map(|(c, _)| *c))
            .max()
            .unwrap_or(0) as f64
    }

    pub fn y_max(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.memory_mb)
            .chain(self.reference.iter().map(|(_, m)| *m))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sample::VerifiedSample;
    use crate::engine::extrapolation::extend;

    fn reference_chart(targets: &[u32]) -> ChartData {
        let dataset = ReferenceDataset::default();
        let extrapolation = extend(dataset.seeds(3), targets).unwrap();
        ChartData::from_extrapolation(
            &extrapolation,
            &dataset,
            &Palette::default(),
            &ChartOptions::default(),
        )
    }

    #[test]
    fn sequences_are_aligned() {
        let chart = reference_chart(&[150, 216, 294, 384]);
        assert_eq!(chart.counts().len(), 7);
        assert_eq!(chart.values().len(), 7);
        assert_eq!(chart.labels().len(), 7);
        assert_eq!(chart.labels()[0], "C24H12");
        assert_eq!(chart.labels()[6], "C384H48");
        assert_eq!(chart.counts(), vec![24, 54, 96, 150, 216, 294, 384]);
    }

    #[test]
    fn boundaries_split_seeds_from_estimates() {
        let chart = reference_chart(&[150, 216, 294, 384]);
        assert_eq!(chart.verified_end(), 3);
        assert_eq!(chart.solid_segments(), 0..2);
        assert_eq!(chart.dashed_segments(), 2..6);
    }

    #[test]
    fn reference_line_starts_at_last_seed() {
        let chart = reference_chart(&[150]);
        let carbons: Vec<u32> = chart.reference().iter().map(|(c, _)| *c).collect();
        assert_eq!(carbons, vec![96, 150, 216, 294, 384]);
    }

    #[test]
    fn colors_cycle_through_palette() {
        let chart = reference_chart(&[150, 216, 294, 384, 486]);
        let palette = Palette::default();
        assert_eq!(chart.points()[7].color, palette.color_for(0));
        assert_eq!(chart.points()[3].color, palette.color_for(3));
    }

    #[test]
    fn no_targets_leaves_no_dashed_segments() {
        let chart = reference_chart(&[]);
        assert_eq!(chart.solid_segments(), 0..2);
        assert!(chart.dashed_segments().is_empty());
    }

    #[test]
    fn axis_extents_cover_points_and_reference() {
        let chart = reference_chart(&[150]);
        assert_eq!(chart.x_max(), 384.0);
        assert_eq!(chart.y_max(), 3841.8);

        let chart = reference_chart(&[150, 216, 294, 384]);
        assert!(chart.y_max() > 4000.0);
    }

    #[test]
    fn lines_share_the_last_seed() {
        let chart = reference_chart(&[150, 216]);
        assert_eq!(
            chart.seed_line(),
            vec![(24.0, 87.3), (54.0, 223.5), (96.0, 479.2)]
        );
        let estimates = chart.estimate_line();
        assert_eq!(estimates.len(), 3);
        assert_eq!(estimates[0], (96.0, 479.2));
        assert_eq!(estimates[2].0, 216.0);
        assert!(reference_chart(&[]).estimate_line().is_empty());
    }

    #[test]
    fn overflowing_estimates_are_reported_as_non_finite() {
        assert_eq!(reference_chart(&[150, 216]).first_non_finite(), None);

        let seeds = [VerifiedSample::new(1, 1.0), VerifiedSample::new(2, 2e300)];
        let extrapolation = extend(&seeds, &[4]).unwrap();
        assert!(extrapolation.estimated()[0].memory_mb.is_infinite());
        let chart = ChartData::from_extrapolation(
            &extrapolation,
            &ReferenceDataset::default(),
            &Palette::default(),
            &ChartOptions::default(),
        );
        assert_eq!(chart.first_non_finite().as_deref(), Some("C4H5"));
    }
}
