//! `ridgeline`: turn a matrix of signal samples into printable ridge parts.
//!
//! Each CSV line becomes one extruded part. Outlines, layout programs and
//! meshes are written under the output directory:
//!
//! ```text
//! cargo run -p ridge-cli -- --input pulsar.csv --output out
//! cargo run -p ridge-cli -- --config ridgeline.toml --dry-run
//! RUST_LOG=debug cargo run -p ridge-cli -- --engine /usr/bin/openscad
//! ```

mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ridge_profile::Baseline;
use ridge_render::ProcessEngine;
use tracing_subscriber::EnvFilter;

use crate::config::PipelineConfig;

/// Command line flags. Every value overrides the config file.
#[derive(Parser, Debug)]
#[command(name = "ridgeline", version, about = "Signal samples to stacked ridge parts")]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render engine executable
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Input CSV, one profile per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print layer height (mm)
    #[arg(long)]
    layer_height: Option<f64>,

    /// Overall stacked height (mm)
    #[arg(long)]
    height: Option<f64>,

    /// Part width (mm)
    #[arg(long)]
    width: Option<f64>,

    /// Horizontal step to vertical axis relation
    #[arg(long)]
    xy_relation: Option<f64>,

    /// Base material below the lowest sample (mm)
    #[arg(long)]
    padding_y: Option<f64>,

    /// Usable bed depth (mm)
    #[arg(long)]
    bed_y: Option<f64>,

    /// Space before the first part of a batch (mm)
    #[arg(long)]
    margin_y: Option<f64>,

    /// Gap between parts (mm)
    #[arg(long)]
    spacing_y: Option<f64>,

    /// Distance from the side of the bed (mm)
    #[arg(long)]
    margin_x: Option<f64>,

    /// Decimal places kept for coordinates
    #[arg(long)]
    precision: Option<u32>,

    /// Baseline minimum: global or row
    #[arg(long)]
    baseline: Option<Baseline>,

    /// Custom part program instead of the built-in one
    #[arg(long)]
    part_program: Option<PathBuf>,

    /// Keep going when the engine exits unsuccessfully
    #[arg(long)]
    tolerate_engine_failures: bool,

    /// Write outlines and layouts without running the engine
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(self, config: &mut PipelineConfig) {
        macro_rules! set {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    config.$field = value;
                })*
            };
        }
        set!(
            engine, input, output, layer_height, height, width, xy_relation, padding_y, bed_y,
            margin_y, spacing_y, margin_x, precision, baseline,
        );
        if self.part_program.is_some() {
            config.part_program = self.part_program;
        }
        config.tolerate_engine_failures |= self.tolerate_engine_failures;
        config.dry_run |= self.dry_run;
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    cli.apply(&mut config);

    let engine = ProcessEngine::new(&config.engine);
    let summary = pipeline::run(&config, &engine)?;
    summary.log();
    Ok(())
}
