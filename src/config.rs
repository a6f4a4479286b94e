use anyhow::{Context, Result};
use glam::DVec3;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::math::RigidTransform;

/// One input file of a composition, with its optional placement
#[derive(Debug, Clone, Deserialize)]
pub struct InputEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub translate: Option<[f64; 3]>,
    #[serde(default)]
    pub rotate: Option<[f64; 3]>,
}

impl InputEntry {
    /// An entry with no placement, passed through unchanged
    pub fn plain(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            translate: None,
            rotate: None,
        }
    }

    /// The rigid transform for this entry, if either part is present
    pub fn transform(&self) -> Option<RigidTransform> {
        if self.translate.is_none() && self.rotate.is_none() {
            return None;
        }
        Some(RigidTransform::new(
            DVec3::from_array(self.translate.unwrap_or([0.0; 3])),
            DVec3::from_array(self.rotate.unwrap_or([0.0; 3])),
        ))
    }
}

/// A full merge composition: inputs with placements, output path and
/// the optional preamble. Loaded from JSON or assembled from CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeConfig {
    pub inputs: Vec<InputEntry>,
    pub output: PathBuf,
    #[serde(default)]
    pub template: Option<PathBuf>,
    #[serde(default)]
    pub wrap: bool,
}

impl MergeConfig {
    /// Loads a composition from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: MergeConfig = serde_json::from_str(&text)
            .context(format!("Failed to parse config file: {:?}", path))?;
        if config.inputs.is_empty() {
            anyhow::bail!("Config {:?} lists no input files", path);
        }
        Ok(config)
    }
}
