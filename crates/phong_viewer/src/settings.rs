//! Viewer settings: JSON file defaults overridden by command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use phong_renderer::{RenderConfig, DEFAULT_GAMMA};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "phong_viewer", version, about = "Phong Ray Tracer")]
pub struct Cli {
    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Output image path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Render rows on all cores
    #[arg(long)]
    pub parallel: bool,
}

/// Settings as stored on disk. Missing fields take their defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerSettings {
    pub width: u32,
    pub height: u32,
    pub gamma: f32,
    pub parallel: bool,
    pub output: PathBuf,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            gamma: DEFAULT_GAMMA,
            parallel: false,
            output: PathBuf::from("phong.png"),
        }
    }
}

impl ViewerSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolve settings from the CLI, reading the settings file if one is given.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.apply(cli))
    }

    /// Flags given on the command line win over file values.
    pub fn apply(mut self, cli: &Cli) -> Self {
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        self.parallel |= cli.parallel;
        self
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_resolution(self.width, self.height)
            .with_gamma(self.gamma)
            .with_parallel(self.parallel)
    }
}
