use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Cruise configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CruiseConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Population frame settings.
    #[serde(default)]
    pub frame: FrameToml,

    /// Sampling design settings.
    #[serde(default)]
    pub design: DesignToml,

    /// Simulation settings.
    #[serde(default)]
    pub simulate: SimulateToml,
}

impl CruiseConfig {
    /// Loads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameToml {
    #[serde(default = "default_n_stands")]
    pub n_stands: usize,
}

impl Default for FrameToml {
    fn default() -> Self {
        Self {
            n_stands: default_n_stands(),
        }
    }
}

fn default_n_stands() -> usize {
    40
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignToml {
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_mc_trials")]
    pub mc_trials: usize,
    #[serde(default = "default_plot_spacing_acres")]
    pub plot_spacing_acres: f64,
    #[serde(default = "default_min_plots")]
    pub min_plots: usize,
    #[serde(default = "default_max_plots")]
    pub max_plots: usize,
    #[serde(default = "default_volume_cap")]
    pub volume_cap: f64,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
}

impl Default for DesignToml {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            mc_trials: default_mc_trials(),
            plot_spacing_acres: default_plot_spacing_acres(),
            min_plots: default_min_plots(),
            max_plots: default_max_plots(),
            volume_cap: default_volume_cap(),
            confidence_level: default_confidence_level(),
        }
    }
}

fn default_sample_size() -> usize {
    5
}
fn default_mc_trials() -> usize {
    10_000
}
fn default_plot_spacing_acres() -> f64 {
    5.0
}
fn default_min_plots() -> usize {
    2
}
fn default_max_plots() -> usize {
    30
}
fn default_volume_cap() -> f64 {
    6000.0
}
fn default_confidence_level() -> f64 {
    0.90
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulateToml {
    #[serde(default = "default_n_trials")]
    pub n_trials: usize,
}

impl Default for SimulateToml {
    fn default() -> Self {
        Self {
            n_trials: default_n_trials(),
        }
    }
}

fn default_n_trials() -> usize {
    200
}
