// cli.rs - Command-line interface configuration
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::{InputEntry, MergeConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-merge")]
#[command(about = "Merge raytracer scene input files", long_about = None)]
pub struct Cli {
    /// Input scene files, merged in the order given
    #[arg(required_unless_present = "config", conflicts_with = "config")]
    pub inputs: Vec<PathBuf>,

    /// Output path for the merged scene
    #[arg(
        short,
        long,
        required_unless_present = "config",
        conflicts_with = "config"
    )]
    pub output: Option<PathBuf>,

    /// Translation "dx dy dz" for the input at the same position, repeatable
    #[arg(long = "translate", value_name = "DX DY DZ")]
    pub translate: Vec<String>,

    /// Rotation in degrees "rx ry rz" for the input at the same position, repeatable
    #[arg(long = "rotate", value_name = "RX RY RZ")]
    pub rotate: Vec<String>,

    /// File whose contents are emitted verbatim before the merged sections
    #[arg(long, conflicts_with = "wrap")]
    pub template: Option<PathBuf>,

    /// Wrap the output in the built-in camera/film/sun preamble
    #[arg(long, default_value = "false")]
    pub wrap: bool,

    /// JSON composition file; replaces the input, transform and output flags
    #[arg(long, conflicts_with_all = ["translate", "rotate", "template", "wrap"])]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolves the merge composition, either from the config file or
    /// by pairing the transform flags with the inputs by position.
    pub fn composition(&self) -> Result<MergeConfig> {
        if let Some(path) = &self.config {
            return MergeConfig::from_file(path);
        }

        if self.translate.len() > self.inputs.len() || self.rotate.len() > self.inputs.len() {
            log::warn!(
                "more transform flags than inputs ({} inputs, {} --translate, {} --rotate); extras are ignored",
                self.inputs.len(),
                self.translate.len(),
                self.rotate.len()
            );
        }

        let inputs = self
            .inputs
            .iter()
            .enumerate()
            .map(|(i, path)| {
                Ok(InputEntry {
                    path: path.clone(),
                    translate: self.translate.get(i).map(|s| parse_triple(s)).transpose()?,
                    rotate: self.rotate.get(i).map(|s| parse_triple(s)).transpose()?,
                })
            })
            .collect::<Result<Vec<InputEntry>>>()?;

        Ok(MergeConfig {
            inputs,
            // clap guarantees output is present when no config file is given
            output: self.output.clone().expect("--output is required"),
            template: self.template.clone(),
            wrap: self.wrap,
        })
    }
}

/// Parses a whitespace-separated "x y z" triple
pub fn parse_triple(text: &str) -> Result<[f64; 3]> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != 3 {
        anyhow::bail!("expected three numbers, got '{}'", text);
    }

    let mut triple = [0.0; 3];
    for (slot, part) in triple.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .context(format!("'{}' is not a number", part))?;
    }
    Ok(triple)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1 -2.5 3e2").unwrap(), [1.0, -2.5, 300.0]);
        assert!(parse_triple("1 2").is_err());
        assert!(parse_triple("a b c").is_err());
    }

    #[test]
    fn test_transforms_pair_by_position() {
        let cli = Cli::parse_from([
            "scene-merge",
            "wheel.in",
            "body.in",
            "--translate",
            "1 0 0",
            "--rotate",
            "0 90 0",
            "-o",
            "car.in",
        ]);
        let config = cli.composition().unwrap();
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.inputs[0].translate, Some([1.0, 0.0, 0.0]));
        assert_eq!(config.inputs[0].rotate, Some([0.0, 90.0, 0.0]));
        assert_eq!(config.inputs[1].translate, None);
        assert_eq!(config.output, PathBuf::from("car.in"));
    }
}
