//! Profile outlines and extrusion planning.
//!
//! This crate turns sample rows into closed 2D cross-sections and picks a
//! single extrusion thickness shared by every part of a run.
//!
//! # Features
//!
//! - **Shared scale**: every row maps onto the same target width, derived
//!   once from the matrix column count
//! - **Exact dimensions**: coordinates are rounded as they are produced, so a
//!   profile's `width`/`height` match its outline vertices exactly
//! - **Layer quantization**: extrusion height is a whole number of layers
//!
//! # Example
//!
//! ```
//! use ridge_types::SampleMatrix;
//! use ridge_profile::{ExtrusionParams, ProfileParams, build_profiles, plan_extrusion};
//!
//! let matrix = SampleMatrix::from_rows(vec![
//!     vec![0.0, 1.0, 2.0],
//!     vec![2.0, 1.0, 0.0],
//!     vec![1.0, 1.0, 1.0],
//! ]).unwrap();
//!
//! let params = ProfileParams::default()
//!     .with_target_width(10.0)
//!     .with_xy_relation(1.0)
//!     .with_padding_y(0.0);
//! let profiles = build_profiles(&matrix, &params).unwrap();
//! assert!(profiles.iter().all(|p| p.is_closed()));
//! assert!(profiles.iter().all(|p| (p.width - 10.0).abs() < 1e-9));
//!
//! let extrusion = plan_extrusion(matrix.row_count(), &ExtrusionParams::default()).unwrap();
//! assert!(extrusion.height > 0.0);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod builder;
mod error;
mod extrusion;
mod params;

pub use builder::{ProfileBuilder, build_profiles};
pub use error::{ProfileError, ProfileResult};
pub use extrusion::{ExtrusionSpec, plan_extrusion};
pub use params::{Baseline, ExtrusionParams, ProfileParams};
