//! Render engine orchestration.
//!
//! Meshes are produced by an external render engine (OpenSCAD by default),
//! invoked once per job as
//!
//! ```text
//! <engine> -o <output> [-D key=<json literal>]... <input>
//! ```
//!
//! Jobs of one phase run concurrently, one thread per job, and are all
//! joined before the phase returns. There is no limit on the number of
//! engine processes in flight and no timeout: a hung engine blocks the run.
//!
//! # Example
//!
//! ```
//! use ridge_render::RenderJob;
//!
//! let job = RenderJob::part(0, "part.scad", "dxf/00.dxf", "stl/00.stl", 3.2);
//! let args: Vec<String> = job
//!     .args()
//!     .iter()
//!     .map(|a| a.to_string_lossy().into_owned())
//!     .collect();
//! assert_eq!(
//!     args,
//!     ["-o", "stl/00.stl", "-D", "dxf=\"dxf/00.dxf\"", "-D", "height=3.2", "part.scad"]
//! );
//! ```
//!
//! # Failure Policy
//!
//! A job whose engine cannot be started fails its phase once every sibling
//! has finished. An engine that starts but exits unsuccessfully produces a
//! [`RenderOutcome`] with `success == false`; [`check_outcomes`] turns those
//! into [`RenderError::EngineFailed`] unless failures are tolerated.

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod engine;
mod error;
mod job;
mod orchestrator;

pub use engine::{Engine, ProcessEngine, RenderOutcome};
pub use error::{RenderError, RenderResult};
pub use job::RenderJob;
pub use orchestrator::{check_outcomes, run_jobs};
