//! End-to-end run: samples in, outlines, layouts and meshes out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ridge_io::{
    OutputLayout, load_samples, save_batch_layout, save_outline, write_part_program,
};
use ridge_layout::{Batch, pack_batches};
use ridge_profile::{ExtrusionSpec, build_profiles, plan_extrusion};
use ridge_render::{Engine, RenderJob, check_outcomes, run_jobs};
use tracing::info;

use crate::config::PipelineConfig;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Output root the files were written under.
    pub output: PathBuf,
    /// Number of profiles, one per input row.
    pub profiles: usize,
    /// Shared extrusion thickness.
    pub extrusion: ExtrusionSpec,
    /// Number of parts in each batch, in batch order.
    pub batch_sizes: Vec<usize>,
    /// Whether the engine was skipped.
    pub dry_run: bool,
}

impl RunSummary {
    /// Log the summary at info level.
    pub fn log(&self) {
        info!(
            output = %self.output.display(),
            profiles = self.profiles,
            extrusion = self.extrusion.height,
            layers = self.extrusion.layers(),
            batches = self.batch_sizes.len(),
            dry_run = self.dry_run,
            "Run complete"
        );
    }
}

/// Run the whole pipeline with the given engine.
///
/// Every input and geometry check happens before the first file is written.
/// All outlines and layout programs are on disk before the engine starts,
/// and every part mesh job finishes before any batch mesh job starts.
///
/// # Errors
///
/// Fails on invalid configuration, unreadable or malformed samples, a part
/// too tall for the bed, write failures and engine failures (unless
/// `tolerate_engine_failures` is set).
pub fn run<E>(config: &PipelineConfig, engine: &E) -> Result<RunSummary>
where
    E: Engine + ?Sized,
{
    config.validate()?;

    let matrix = load_samples(&config.input, config.precision)
        .with_context(|| format!("Failed to load samples: {}", config.input.display()))?;
    // Last line of the file is the front-most ridge and becomes part 00.
    let matrix = matrix.reversed();

    let profiles = build_profiles(&matrix, &config.profile_params()).context("Failed to build profiles")?;
    let extrusion = plan_extrusion(matrix.row_count(), &config.extrusion_params())?;
    if extrusion.is_degenerate() {
        bail!(
            "height {} leaves less than one {} mm layer for each of {} parts",
            config.height,
            config.layer_height,
            matrix.row_count()
        );
    }
    let batches = pack_batches(&profiles, &config.pack_params()).context("Failed to pack parts")?;
    let custom_program = config.part_program.as_deref().map(resolve_part_program).transpose()?;

    let root = std::path::absolute(&config.output)
        .with_context(|| format!("Invalid output directory: {}", config.output.display()))?;
    let layout = OutputLayout::new(root);
    layout.ensure().context("Failed to prepare output directory")?;

    for (index, profile) in profiles.iter().enumerate() {
        save_outline(profile, layout.outline_path(index))?;
    }
    let program = match custom_program {
        Some(path) => path,
        None => {
            let path = layout.part_program_path();
            write_part_program(&path)?;
            path
        }
    };
    for batch in &batches {
        save_batch_layout(
            batch,
            extrusion.height,
            |index| layout.outline_import_path(index),
            layout.batch_layout_path(batch.index),
        )?;
    }
    info!(
        outlines = profiles.len(),
        layouts = batches.len(),
        root = %layout.root().display(),
        "Wrote outlines and batch layouts"
    );

    let part_jobs = part_jobs(&layout, &program, profiles.len(), &extrusion);
    let batch_jobs = batch_jobs(&layout, &batches);

    if config.dry_run {
        for job in part_jobs.iter().chain(&batch_jobs) {
            info!(job = %job.label, output = %job.output.display(), "Dry run, skipping render");
        }
    } else {
        render_phase(engine, &part_jobs, config.tolerate_engine_failures)
            .context("Part mesh rendering failed")?;
        render_phase(engine, &batch_jobs, config.tolerate_engine_failures)
            .context("Batch mesh rendering failed")?;
    }

    Ok(RunSummary {
        output: layout.root().to_path_buf(),
        profiles: profiles.len(),
        extrusion,
        batch_sizes: batches.iter().map(Batch::len).collect(),
        dry_run: config.dry_run,
    })
}

/// Absolute path of a configured part program, which must already exist.
fn resolve_part_program(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        bail!("Part program not found: {}", path.display());
    }
    std::path::absolute(path).with_context(|| format!("Invalid part program path: {}", path.display()))
}

fn part_jobs(layout: &OutputLayout, program: &Path, count: usize, extrusion: &ExtrusionSpec) -> Vec<RenderJob> {
    (0..count)
        .map(|index| {
            RenderJob::part(
                index,
                program,
                layout.outline_path(index),
                layout.part_mesh_path(index),
                extrusion.height,
            )
        })
        .collect()
}

fn batch_jobs(layout: &OutputLayout, batches: &[Batch]) -> Vec<RenderJob> {
    batches
        .iter()
        .map(|batch| {
            RenderJob::batch(
                batch.index,
                layout.batch_layout_path(batch.index),
                layout.batch_mesh_path(batch.index),
            )
        })
        .collect()
}

fn render_phase<E>(engine: &E, jobs: &[RenderJob], tolerate_failures: bool) -> Result<()>
where
    E: Engine + ?Sized,
{
    let outcomes = run_jobs(engine, jobs)?;
    check_outcomes(&outcomes, tolerate_failures)?;
    Ok(())
}
