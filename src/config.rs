use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{colors, fonts, output};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default = "default_foreground")]
    pub foreground: [u8; 3],
    #[serde(default = "default_font_size_ratio")]
    pub font_size_ratio: f32,
    /// Scalable font files tried in order; bare names are looked up in the system font directories
    #[serde(default = "default_fonts")]
    pub fonts: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(output::ICON_DIR)
}

fn default_background() -> [u8; 3] {
    colors::BACKGROUND
}

fn default_foreground() -> [u8; 3] {
    colors::FOREGROUND
}

fn default_font_size_ratio() -> f32 {
    fonts::FONT_SIZE_RATIO
}

fn default_fonts() -> Vec<String> {
    fonts::DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: default_output_dir(),
            background: default_background(),
            foreground: default_foreground(),
            font_size_ratio: default_font_size_ratio(),
            fonts: default_fonts(),
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(contents)
            .context("Failed to parse config")?;

        config.validate()?;

        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.font_size_ratio > 0.0 && self.font_size_ratio <= 1.0) {
            bail!("font_size_ratio must be in (0, 1], got {}", self.font_size_ratio);
        }

        if self.fonts.iter().any(|f| f.trim().is_empty()) {
            bail!("font names cannot be empty");
        }

        if self.output_dir.as_os_str().is_empty() {
            bail!("output_dir cannot be empty");
        }

        Ok(())
    }

    /// Font pixel size for a canvas, truncated to whole pixels
    pub fn font_px(&self, size: u32) -> u32 {
        (size as f32 * self.font_size_ratio) as u32
    }
}
