use super::sandbox::FrameConfig;
use super::{load_json, OutputConfig};
use serde::Deserialize;
use std::ops::Range;
use std::path::Path;

/// Config for `noise_sweep`: one frame description plus a seed range.
#[derive(Debug, Default, Deserialize)]
pub struct SweepConfig {
    #[serde(flatten)]
    pub frame: FrameConfig,
    #[serde(default)]
    pub seeds: SeedRange,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SeedRange {
    pub start: u64,
    pub count: u64,
}

impl Default for SeedRange {
    fn default() -> Self {
        Self {
            start: 0,
            count: 256,
        }
    }
}

impl SeedRange {
    pub fn to_range(self) -> Range<u64> {
        self.start..self.start.saturating_add(self.count)
    }
}

pub fn load_config(path: &Path) -> Result<SweepConfig, String> {
    load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_range_defaults_and_overrides() {
        let cfg: SweepConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.seeds.to_range(), 0..256);

        let cfg: SweepConfig =
            serde_json::from_str(r#"{"seeds": {"start": 10, "count": 5}, "transform": {"noise": 2}}"#)
                .unwrap();
        assert_eq!(cfg.seeds.to_range(), 10..15);
        assert_eq!(cfg.frame.resolve().transform.noise_amplitude, 2.0);
    }
}
