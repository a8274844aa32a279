//! Error types for render orchestration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while running render jobs.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The engine executable could not be started.
    #[error("failed to start render engine '{program}' for {job}: {source}")]
    Spawn {
        /// Engine executable.
        program: PathBuf,
        /// Job label.
        job: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A worker thread could not be created.
    #[error("failed to start worker thread for {job}: {source}")]
    Thread {
        /// Job label.
        job: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked.
    #[error("worker thread for {job} panicked")]
    WorkerPanicked {
        /// Job label.
        job: String,
    },

    /// One or more engine runs exited unsuccessfully.
    #[error("{failed} of {total} render jobs failed (first: {first})")]
    EngineFailed {
        /// Number of failed jobs.
        failed: usize,
        /// Number of jobs in the phase.
        total: usize,
        /// Label of the first failed job.
        first: String,
    },
}
