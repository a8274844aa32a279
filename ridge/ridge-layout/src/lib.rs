//! Batch layout for ridgeline parts.
//!
//! Profiles are packed, in the order given, onto print beds of fixed depth.
//! The packer is a deterministic single pass with one open batch: a batch is
//! sealed as soon as the next part would overflow it. It does not search for
//! an optimal arrangement and never rotates or splits a part.
//!
//! # Example
//!
//! ```
//! use ridge_layout::{PackParams, pack_heights};
//!
//! let params = PackParams::default()
//!     .with_bed_y(120.0)
//!     .with_margin_y(5.0)
//!     .with_spacing_y(2.0);
//!
//! let batches = pack_heights(&[50.0; 5], &params).unwrap();
//! let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
//! assert_eq!(sizes, vec![2, 2, 1]);
//! ```
//!
//! # Input order
//!
//! Parts are placed in the order they are passed in. The ridgeline pipeline
//! builds profiles from the reversed sample matrix, so the last data row is
//! the first part of the first batch.
//!
//! # Coordinate System
//!
//! Layouts are mirrored for printing: each part is flipped about the X axis
//! and translated to `(margin_x, -offset_y, -extrusion)`, so parts grow away
//! from the front edge of the bed.

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod batch;
mod error;
mod packer;
mod params;

pub use batch::{Batch, Placement};
pub use error::{LayoutError, LayoutResult};
pub use packer::{pack_batches, pack_heights};
pub use params::PackParams;
