use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Input files for one run. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Sources {
    pub casualty: PathBuf,
    pub vehicle: PathBuf,
    pub vehicle_last_5_years: PathBuf,
    pub casualty_last_5_years: PathBuf,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            casualty: "dft-road-casualty-statistics-casualty-2022.csv".into(),
            vehicle: "dft-road-casualty-statistics-vehicle-2022.csv".into(),
            vehicle_last_5_years: "dft-road-casualty-statistics-vehicle-last-5-years.csv".into(),
            casualty_last_5_years: "dft-road-casualty-statistics-casualty-last-5-years.csv"
                .into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub sources: Sources,
    /// Directory the PNG charts are written to; created if missing.
    pub output_dir: PathBuf,
    /// How many models the bar chart shows after skipping the top-ranked one.
    pub top_models: usize,
    /// How many models the yearly trend considers before skipping the top-ranked one.
    pub trend_models: usize,
    pub histogram_bins: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Sources::default(),
            output_dir: "charts".into(),
            top_models: 20,
            trend_models: 8,
            histogram_bins: 15,
        }
    }
}

impl Config {
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_yaml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// `None` means the built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_yaml(p),
            None => Ok(Self::default()),
        }
    }
}
