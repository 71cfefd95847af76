//! YAML configuration file.
//!
//! Every key is optional; command-line flags win over the file, and the file
//! wins over built-in defaults.
//!
//! ```yaml
//! output_dir: patterns
//! format: png
//! size_table: sizes/pants.csv
//! style:
//!   color: "#1d3557"
//!   structural_width: 4
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tailor::{OutputFormat, RenderStyle};

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory images are written to (default: current directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// png or svg
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Size table used with `--size` when `--size-table` is not given
    #[serde(default)]
    pub size_table: Option<PathBuf>,

    /// Style overrides (merged with defaults)
    #[serde(default)]
    pub style: StyleOverrides,
}

/// Partial [`RenderStyle`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOverrides {
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub background: Option<String>,

    #[serde(default)]
    pub structural_width: Option<f64>,

    #[serde(default)]
    pub guide_width: Option<f64>,
}

impl StyleOverrides {
    /// Merge with defaults, preferring values set here.
    pub fn merge_with(&self, defaults: &RenderStyle) -> RenderStyle {
        RenderStyle {
            color: self.color.clone().unwrap_or_else(|| defaults.color.clone()),
            background: self
                .background
                .clone()
                .unwrap_or_else(|| defaults.background.clone()),
            structural_width: self.structural_width.unwrap_or(defaults.structural_width),
            guide_width: self.guide_width.unwrap_or(defaults.guide_width),
        }
    }
}

impl Config {
    /// Load a config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_yaml(
            "output_dir: out\nformat: svg\nsize_table: sizes.csv\nstyle:\n  color: red\n  guide_width: 2\n",
        )
        .unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.format, Some(OutputFormat::Svg));
        assert_eq!(config.size_table, Some(PathBuf::from("sizes.csv")));
        assert_eq!(config.style.color.as_deref(), Some("red"));
        assert_eq!(config.style.guide_width, Some(2.0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_yaml("colour: red\n").is_err());
    }

    #[test]
    fn merged_style_with_bad_values_fails_validation() {
        let config = Config::from_yaml("style:\n  color: notacolor\n").unwrap();
        assert!(config.style.merge_with(&RenderStyle::default()).validate().is_err());

        let config = Config::from_yaml("style:\n  guide_width: 0\n").unwrap();
        assert!(config.style.merge_with(&RenderStyle::default()).validate().is_err());

        let config = Config::from_yaml("style:\n  color: \"#1d3557\"\n  structural_width: 4\n").unwrap();
        assert!(config.style.merge_with(&RenderStyle::default()).validate().is_ok());
    }

    #[test]
    fn style_merge_prefers_overrides() {
        let overrides = StyleOverrides {
            color: Some("black".into()),
            structural_width: Some(3.0),
            ..Default::default()
        };
        let style = overrides.merge_with(&RenderStyle::default());
        assert_eq!(style.color, "black");
        assert_eq!(style.structural_width, 3.0);
        assert_eq!(style.background, "white");
        assert_eq!(style.guide_width, 1.0);
    }
}
