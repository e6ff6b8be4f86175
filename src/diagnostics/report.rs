use super::TimingBreakdown;
use crate::scale::ScaleAdjustment;
use crate::transform::TransformParams;
use crate::trilateration::TrilaterationResult;
use crate::types::{Anchors, Point2D};
use serde::Serialize;

/// Inputs echoed back in a report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineInput {
    pub anchors: Anchors,
    pub query: Point2D,
    pub transform: TransformParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub scale_adjust: bool,
    pub invert_result: bool,
}

/// Result of one pipeline frame, including every intermediate the host may
/// want to draw.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub input: PipelineInput,
    /// Anchors after the forward transform (and noise).
    pub beacons: Anchors,
    /// Ranges from the query to the true anchors.
    pub raw_distances: [f64; 3],
    /// Ranges fed to the solver (after scale adjustment, if any).
    pub distances: [f64; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleAdjustment>,
    /// Solver output in beacon (observed) space.
    pub solution: TrilaterationResult,
    /// Final estimate; mapped back to true space when `invert_result` is set.
    pub recovered: Point2D,
    /// `|recovered - query|`.
    pub error: f64,
    pub timings: TimingBreakdown,
}

impl PipelineReport {
    pub fn print_text_summary(&self) {
        let input = &self.input;
        println!("Trilateration summary");
        println!("  query: ({:.4}, {:.4})", input.query.x, input.query.y);
        let t = &input.transform;
        println!(
            "  transform: translate=({:.3}, {:.3}) rotation={:.2}° scale=({:.4}, {:.4}) noise={:.3}",
            t.translate_x,
            t.translate_y,
            t.rotation_degrees,
            t.scale_x,
            t.scale_y,
            t.noise_amplitude
        );
        match input.seed {
            Some(seed) => println!("  seed: {seed}"),
            None => println!("  seed: - (noise disabled)"),
        }

        println!("\nAnchors");
        for (label, anchor) in input.anchors.iter() {
            let i = label.index();
            let beacon = self.beacons.get(label);
            println!(
                "  {}: true=({:.3}, {:.3}) beacon=({:.3}, {:.3}) range={:.4} adjusted={:.4}",
                label,
                anchor.x,
                anchor.y,
                beacon.x,
                beacon.y,
                self.raw_distances[i],
                self.distances[i]
            );
        }

        match &self.scale {
            Some(adj) => println!(
                "\nScale adjustment: factor={:.6} (true mean={:.4}, beacon mean={:.4})",
                adj.factor, adj.true_mean_distance, adj.observed_mean_distance
            ),
            None => println!("\nScale adjustment: disabled"),
        }

        let s = &self.solution;
        println!(
            "Solution (beacon space): ({:.4}, {:.4}) det={:.3e} rms_residual={:.4e}",
            s.point.x,
            s.point.y,
            s.determinant,
            s.rms_residual()
        );
        println!(
            "Recovered: ({:.4}, {:.4}) error={:.6}{}",
            self.recovered.x,
            self.recovered.y,
            self.error,
            if input.invert_result {
                ""
            } else {
                " (not inverted)"
            }
        );
        println!(
            "Timings (ms): {} total={:.4}",
            self.timings
                .stages
                .iter()
                .map(|s| format!("{}={:.4}", s.label, s.elapsed_ms))
                .collect::<Vec<_>>()
                .join(" "),
            self.timings.total_ms
        );
    }
}

/// Outcome of one seeded frame in a sweep.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepSample {
    pub seed: u64,
    /// `None` when the frame failed (e.g. noise made the beacons collinear).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Aggregate error statistics across the successful frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepStats {
    pub frames: usize,
    pub failures: usize,
    pub mean_error: f64,
    pub rms_error: f64,
    pub max_error: f64,
}

impl SweepStats {
    pub fn from_samples(samples: &[SweepSample]) -> Self {
        let errors: Vec<f64> = samples.iter().filter_map(|s| s.error).collect();
        let failures = samples.len() - errors.len();
        if errors.is_empty() {
            return Self {
                frames: samples.len(),
                failures,
                ..Default::default()
            };
        }
        let n = errors.len() as f64;
        let sum: f64 = errors.iter().sum();
        let sum_sq: f64 = errors.iter().map(|e| e * e).sum();
        let max = errors.iter().copied().fold(0.0f64, f64::max);
        Self {
            frames: samples.len(),
            failures,
            mean_error: sum / n,
            rms_error: (sum_sq / n).sqrt(),
            max_error: max,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub input: PipelineInput,
    pub stats: SweepStats,
    pub samples: Vec<SweepSample>,
    pub elapsed_ms: f64,
}

impl SweepReport {
    pub fn print_text_summary(&self) {
        let s = &self.stats;
        println!("Noise sweep");
        println!(
            "  noise={:.3} frames={} failures={}",
            self.input.transform.noise_amplitude, s.frames, s.failures
        );
        println!(
            "  error: mean={:.6} rms={:.6} max={:.6}",
            s.mean_error, s.rms_error, s.max_error
        );
        println!("  elapsed_ms={:.3}", self.elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seed: u64, error: Option<f64>) -> SweepSample {
        SweepSample {
            seed,
            error,
            failure: error.is_none().then(|| "degenerate".to_string()),
        }
    }

    #[test]
    fn stats_skip_failed_frames() {
        let samples = [sample(0, Some(3.0)), sample(1, None), sample(2, Some(4.0))];
        let stats = SweepStats::from_samples(&samples);
        assert_eq!(stats.frames, 3);
        assert_eq!(stats.failures, 1);
        assert!((stats.mean_error - 3.5).abs() < 1e-12);
        assert!((stats.rms_error - 12.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.max_error, 4.0);
    }

    #[test]
    fn stats_of_all_failures_are_zero() {
        let stats = SweepStats::from_samples(&[sample(0, None)]);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.mean_error, 0.0);
    }
}
