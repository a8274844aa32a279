//! File input and output for ridgeline.
//!
//! - **Samples**: headerless CSV, one profile per line, rounded on load
//! - **Outlines**: one DXF file per profile, a single closed polyline in mm
//! - **Layouts**: one OpenSCAD program per batch that flips, places and
//!   extrudes every outline of the batch
//! - **Part program**: the OpenSCAD program that extrudes a single outline
//! - **Output tree**: the four output directories and their file names
//!
//! # Example
//!
//! ```
//! use ridge_io::parse_samples;
//!
//! let matrix = parse_samples("0,1.23456,2\n2,1,0\n", 4).unwrap();
//! assert_eq!(matrix.row_count(), 2);
//! assert_eq!(matrix.rows()[0][1], 1.2346);
//! ```
//!
//! # Output Tree
//!
//! ```text
//! <root>/
//!   part.scad            built-in part program
//!   dxf/00.dxf           outline of profile 0
//!   stl/00.stl           mesh of profile 0
//!   batch_scad/batch_00.scad
//!   batch_stl/batch_00.stl
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod dxf;
mod error;
mod output;
mod samples;
mod scad;

pub use dxf::{outline_dxf, save_outline};
pub use error::{IoError, IoResult};
pub use output::{OutputLayout, batch_file_name, outline_file_name};
pub use samples::{load_samples, parse_samples};
pub use scad::{PART_PROGRAM, batch_layout, save_batch_layout, write_part_program};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `contents` to `path`, replacing any existing file.
pub(crate) fn write_text(path: &Path, contents: &str) -> IoResult<()> {
    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(contents.as_bytes())?;
        writer.flush()
    };
    write().map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
