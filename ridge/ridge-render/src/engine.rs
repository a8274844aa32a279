//! Render engine abstraction and the process-backed engine.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{RenderError, RenderJob, RenderResult};

/// Result of one finished engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Label of the job that produced this outcome.
    pub label: String,

    /// Exit code, if the engine exited normally.
    pub status: Option<i32>,

    /// Whether the engine reported success.
    pub success: bool,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,
}

/// Something that can execute a render job to completion.
///
/// Implementations are shared between worker threads.
pub trait Engine: Sync {
    /// Run one job and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error only when the job could not be started. An engine
    /// that runs and fails reports it through [`RenderOutcome::success`].
    fn render(&self, job: &RenderJob) -> RenderResult<RenderOutcome>;
}

/// Runs jobs by spawning an external executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEngine {
    program: PathBuf,
}

impl ProcessEngine {
    /// Engine backed by `program`, resolved through `PATH` if not a path.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The engine executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Engine for ProcessEngine {
    fn render(&self, job: &RenderJob) -> RenderResult<RenderOutcome> {
        let output = Command::new(&self.program)
            .args(job.args())
            .output()
            .map_err(|source| RenderError::Spawn {
                program: self.program.clone(),
                job: job.label.clone(),
                source,
            })?;

        Ok(RenderOutcome {
            label: job.label.clone(),
            status: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Write an executable shell script and return its path.
    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn test_engine_receives_contract_args() {
        let dir = tempfile::tempdir().unwrap();
        // $2 is the output path; echo every argument into it.
        let engine = ProcessEngine::new(script(dir.path(), "engine.sh", r#"echo "$@" > "$2"; echo rendered"#));
        let out = dir.path().join("00.stl");
        let job = RenderJob::part(0, "part.scad", "dxf/00.dxf", &out, 1.5);

        let outcome = engine.render(&job).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.status, Some(0));
        assert_eq!(outcome.stdout.trim(), "rendered");

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            written.trim(),
            format!(
                "-o {} -D dxf=\"dxf/00.dxf\" -D height=1.5 part.scad",
                out.display()
            )
        );
    }

    #[test]
    fn test_engine_failure_is_an_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let engine = ProcessEngine::new(script(dir.path(), "fail.sh", "echo broken >&2; exit 3"));
        let outcome = engine
            .render(&RenderJob::batch(0, "in.scad", "out.stl"))
            .unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.status, Some(3));
        assert_eq!(outcome.stderr.trim(), "broken");
    }

    #[test]
    fn test_missing_engine_is_spawn_error() {
        let engine = ProcessEngine::new("/nonexistent/ridgeline-render-engine");
        let err = engine
            .render(&RenderJob::batch(0, "in.scad", "out.stl"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Spawn { .. }));
    }
}
