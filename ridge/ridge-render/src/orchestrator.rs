//! Concurrent job execution.

use std::thread;

use tracing::{debug, info, warn};

use crate::{Engine, RenderError, RenderJob, RenderOutcome, RenderResult};

/// Run every job concurrently and wait for all of them.
///
/// Each job gets its own thread; nothing bounds how many engine processes
/// run at once. Outcomes are returned in job order. Jobs that started keep
/// running when a sibling fails to start; the first start failure, in job
/// order, is returned once all threads have been joined.
///
/// # Errors
///
/// Returns [`RenderError::Spawn`] or [`RenderError::Thread`] when a job could
/// not be started, and [`RenderError::WorkerPanicked`] if a worker panicked.
pub fn run_jobs<E>(engine: &E, jobs: &[RenderJob]) -> RenderResult<Vec<RenderOutcome>>
where
    E: Engine + ?Sized,
{
    info!(jobs = jobs.len(), "Starting render jobs");

    let results: Vec<RenderResult<RenderOutcome>> = thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .iter()
            .map(|job| {
                thread::Builder::new()
                    .name(job.label.clone())
                    .spawn_scoped(scope, move || {
                        debug!(job = %job.label, output = %job.output.display(), "Render job started");
                        engine.render(job)
                    })
                    .map_err(|source| RenderError::Thread {
                        job: job.label.clone(),
                        source,
                    })
            })
            .collect();

        handles
            .into_iter()
            .zip(jobs)
            .map(|(handle, job)| {
                handle?.join().unwrap_or_else(|_| {
                    Err(RenderError::WorkerPanicked {
                        job: job.label.clone(),
                    })
                })
            })
            .collect()
    });

    for outcome in results.iter().flatten() {
        log_outcome(outcome);
    }

    let outcomes = results.into_iter().collect::<RenderResult<Vec<_>>>()?;
    info!(
        jobs = outcomes.len(),
        failed = outcomes.iter().filter(|o| !o.success).count(),
        "Render jobs finished"
    );
    Ok(outcomes)
}

/// Decide whether a finished phase counts as successful.
///
/// With `tolerate_failures` set, unsuccessful engine runs are only logged,
/// matching runs that treat any exit as completion.
///
/// # Errors
///
/// Returns [`RenderError::EngineFailed`] if any outcome is unsuccessful and
/// failures are not tolerated.
pub fn check_outcomes(outcomes: &[RenderOutcome], tolerate_failures: bool) -> RenderResult<()> {
    let failed: Vec<&RenderOutcome> = outcomes.iter().filter(|o| !o.success).collect();
    let Some(first) = failed.first() else {
        return Ok(());
    };

    if tolerate_failures {
        warn!(
            failed = failed.len(),
            total = outcomes.len(),
            "Ignoring failed render jobs"
        );
        return Ok(());
    }

    Err(RenderError::EngineFailed {
        failed: failed.len(),
        total: outcomes.len(),
        first: first.label.clone(),
    })
}

fn log_outcome(outcome: &RenderOutcome) {
    let job = outcome.label.as_str();
    for line in outcome.stdout.lines().filter(|l| !l.trim().is_empty()) {
        debug!(job, "{line}");
    }
    if outcome.success {
        for line in outcome.stderr.lines().filter(|l| !l.trim().is_empty()) {
            debug!(job, "{line}");
        }
        debug!(job, status = ?outcome.status, "Render job finished");
    } else {
        for line in outcome.stderr.lines().filter(|l| !l.trim().is_empty()) {
            warn!(job, "{line}");
        }
        warn!(job, status = ?outcome.status, "Render job failed");
    }
}
