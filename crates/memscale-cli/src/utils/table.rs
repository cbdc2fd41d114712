use memscale::engine::config::StudyConfig;
use memscale::workflows::estimate::EstimateResult;
use std::fmt::Write;

/// Formats the run as a fixed-width table: one row per sample, with the
/// verified value and relative deviation when the reference table knows the
/// carbon count.
pub fn format_summary(result: &EstimateResult, config: &StudyConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>8} {:>12} {:>10} {:>14} {:>10}",
        "Molecule", "Carbons", "MB/core", "Source", "Verified MB", "Deviation"
    );
    let _ = writeln!(out, "{}", "-".repeat(69));

    let samples = result.extrapolation.samples();
    for (sample, verified) in samples.iter().zip(result.with_verified(config)) {
        let (verified_col, deviation_col) = match verified {
            Some(v) if sample.is_estimated() => (
                format!("{:.1}", v),
                format!("{:+.1}%", relative_deviation(sample.memory_mb, v)),
            ),
            Some(v) => (format!("{:.1}", v), "-".to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>12.1} {:>10} {:>14} {:>10}",
            sample.label(),
            sample.carbon_count(),
            sample.memory_mb,
            sample.provenance.as_str(),
            verified_col,
            deviation_col
        );
    }
    out
}

fn relative_deviation(estimate: f64, verified: f64) -> f64 {
    (estimate - verified) / verified * 100.0
}
