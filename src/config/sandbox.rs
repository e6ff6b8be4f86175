use super::{load_json, OutputConfig};
use crate::pipeline::PipelineParams;
use crate::transform::TransformParams;
use crate::trilateration::TrilaterationOptions;
use crate::types::{Anchors, Point2D};
use serde::Deserialize;
use std::path::Path;

/// Config for a single pipeline frame (`sandbox_demo`).
#[derive(Debug, Default, Deserialize)]
pub struct SandboxConfig {
    #[serde(flatten)]
    pub frame: FrameConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Frame inputs shared by the single-run and sweep configs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Anchors A, B, C as `[x, y]` pairs.
    pub anchors: Option<[[f64; 2]; 3]>,
    pub query: Option<[f64; 2]>,
    pub transform: TransformConfig,
    pub seed: Option<u64>,
    pub scale_adjust: Option<bool>,
    pub invert_result: Option<bool>,
    /// Relative singularity threshold for the solver.
    pub epsilon: Option<f64>,
}

impl FrameConfig {
    pub fn resolve(&self) -> PipelineParams {
        let mut params = PipelineParams::default();
        if let Some(a) = self.anchors {
            params.anchors = Anchors(a.map(Point2D::from));
        }
        if let Some(q) = self.query {
            params.query = Point2D::from(q);
        }
        params.transform = self.transform.resolve();
        params.seed = self.seed;
        if let Some(v) = self.scale_adjust {
            params.scale_adjust = v;
        }
        if let Some(v) = self.invert_result {
            params.invert_result = v;
        }
        if let Some(v) = self.epsilon {
            params.trilateration = TrilaterationOptions { epsilon: v };
        }
        params
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub translate: Option<[f64; 2]>,
    pub rotation_deg: Option<f64>,
    /// Uniform scale; overridden per axis by `scale_x` / `scale_y`.
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub noise: Option<f64>,
}

impl TransformConfig {
    pub fn resolve(&self) -> TransformParams {
        let mut params = TransformParams::identity();
        if let Some([dx, dy]) = self.translate {
            params = params.with_translation(dx, dy);
        }
        if let Some(v) = self.rotation_deg {
            params.rotation_degrees = v;
        }
        if let Some(s) = self.scale {
            params = params.with_uniform_scale(s);
        }
        if let Some(v) = self.scale_x {
            params.scale_x = v;
        }
        if let Some(v) = self.scale_y {
            params.scale_y = v;
        }
        if let Some(v) = self.noise {
            params.noise_amplitude = v;
        }
        params
    }
}

pub fn load_config(path: &Path) -> Result<SandboxConfig, String> {
    load_json(path)
}
