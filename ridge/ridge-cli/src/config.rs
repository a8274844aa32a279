//! Pipeline configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command line flags. The result is converted once into the parameter
//! structs of each stage and never changed during a run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ridge_layout::PackParams;
use ridge_profile::{Baseline, ExtrusionParams, ProfileParams};
use ridge_types::DEFAULT_PRECISION;
use serde::Deserialize;

/// Everything a run can be configured with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Render engine executable.
    pub engine: PathBuf,
    /// Headerless CSV with one profile per line.
    pub input: PathBuf,
    /// Output root directory.
    pub output: PathBuf,
    /// Print layer height in mm; the extrusion is a multiple of it.
    pub layer_height: f64,
    /// Overall stacked height of all parts in mm.
    pub height: f64,
    /// Overall width of every part in mm.
    pub width: f64,
    /// Horizontal step to vertical axis relation. Lower means taller spikes.
    pub xy_relation: f64,
    /// Extra base material below the lowest sample in mm.
    pub padding_y: f64,
    /// Usable bed depth in mm.
    pub bed_y: f64,
    /// Empty space before the first part of a batch in mm.
    pub margin_y: f64,
    /// Gap between parts of a batch in mm.
    pub spacing_y: f64,
    /// Distance of parts from the side of the bed in mm.
    pub margin_x: f64,
    /// Decimal places kept for samples and coordinates.
    pub precision: u32,
    /// Minimum that lifts samples onto the baseline.
    pub baseline: Baseline,
    /// Custom part program; the built-in one is written when unset.
    pub part_program: Option<PathBuf>,
    /// Treat unsuccessful engine exits as completed jobs.
    pub tolerate_engine_failures: bool,
    /// Write every file but do not run the engine.
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            engine: PathBuf::from("openscad"),
            input: PathBuf::from("pulsar.csv"),
            output: PathBuf::from("out"),
            layer_height: 0.2,
            height: 256.0,
            width: 188.0,
            xy_relation: 1.197,
            padding_y: 3.0,
            bed_y: 200.0,
            margin_y: 5.0,
            spacing_y: 2.0,
            margin_x: 10.0,
            precision: DEFAULT_PRECISION,
            baseline: Baseline::Global,
            part_program: None,
            tolerate_engine_failures: false,
            dry_run: false,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration file; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid configuration TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parse configuration TOML.
    ///
    /// # Errors
    ///
    /// Fails on syntax errors, unknown keys and mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Check every stage's parameters before anything is written.
    ///
    /// # Errors
    ///
    /// Fails on the first parameter a stage would reject.
    pub fn validate(&self) -> Result<()> {
        self.profile_params()
            .validate()
            .context("Invalid profile configuration")?;
        self.pack_params()
            .validate()
            .context("Invalid bed configuration")?;
        self.extrusion_params()
            .validate()
            .context("Invalid extrusion configuration")?;
        Ok(())
    }

    /// Profile stage parameters.
    #[must_use]
    pub fn profile_params(&self) -> ProfileParams {
        ProfileParams {
            target_width: self.width,
            xy_relation: self.xy_relation,
            padding_y: self.padding_y,
            precision: self.precision,
            baseline: self.baseline,
        }
    }

    /// Extrusion planning parameters.
    #[must_use]
    pub fn extrusion_params(&self) -> ExtrusionParams {
        ExtrusionParams {
            target_height: self.height,
            layer_height: self.layer_height,
            precision: self.precision,
        }
    }

    /// Batch packing parameters.
    #[must_use]
    pub fn pack_params(&self) -> PackParams {
        PackParams {
            bed_y: self.bed_y,
            margin_y: self.margin_y,
            spacing_y: self.spacing_y,
            margin_x: self.margin_x,
            precision: self.precision,
        }
    }
}
