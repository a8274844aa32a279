//! Output directory tree and file naming.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{IoError, IoResult};

const OUTLINE_DIR: &str = "dxf";
const PART_MESH_DIR: &str = "stl";
const BATCH_LAYOUT_DIR: &str = "batch_scad";
const BATCH_MESH_DIR: &str = "batch_stl";
const PART_PROGRAM_FILE: &str = "part.scad";

/// File name of a profile outline, e.g. `07.dxf`.
#[must_use]
pub fn outline_file_name(index: usize) -> String {
    format!("{index:02}.dxf")
}

/// File name of a batch file with the given extension, e.g. `batch_03.scad`.
///
/// # Example
///
/// ```
/// use ridge_io::batch_file_name;
///
/// assert_eq!(batch_file_name(3, "scad"), "batch_03.scad");
/// assert_eq!(batch_file_name(12, "stl"), "batch_12.stl");
/// ```
#[must_use]
pub fn batch_file_name(index: usize, extension: &str) -> String {
    format!("batch_{index:02}.{extension}")
}

/// Paths of every file a run produces under one output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Output tree rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding profile outlines.
    #[must_use]
    pub fn outline_dir(&self) -> PathBuf {
        self.root.join(OUTLINE_DIR)
    }

    /// Directory holding per-profile meshes.
    #[must_use]
    pub fn part_mesh_dir(&self) -> PathBuf {
        self.root.join(PART_MESH_DIR)
    }

    /// Directory holding batch layout programs.
    #[must_use]
    pub fn batch_layout_dir(&self) -> PathBuf {
        self.root.join(BATCH_LAYOUT_DIR)
    }

    /// Directory holding batch meshes.
    #[must_use]
    pub fn batch_mesh_dir(&self) -> PathBuf {
        self.root.join(BATCH_MESH_DIR)
    }

    /// Create all four output directories.
    ///
    /// Existing directories are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::NotADirectory`] if a path exists as something
    /// other than a directory, or [`IoError::Write`] if creation fails.
    pub fn ensure(&self) -> IoResult<()> {
        for dir in [
            self.outline_dir(),
            self.part_mesh_dir(),
            self.batch_layout_dir(),
            self.batch_mesh_dir(),
        ] {
            if dir.exists() && !dir.is_dir() {
                return Err(IoError::NotADirectory { path: dir });
            }
            std::fs::create_dir_all(&dir).map_err(|source| IoError::Write {
                path: dir.clone(),
                source,
            })?;
            debug!(path = %dir.display(), "Output directory ready");
        }
        Ok(())
    }

    /// Outline file of a profile.
    #[must_use]
    pub fn outline_path(&self, index: usize) -> PathBuf {
        self.outline_dir().join(outline_file_name(index))
    }

    /// Mesh file of a profile.
    #[must_use]
    pub fn part_mesh_path(&self, index: usize) -> PathBuf {
        self.part_mesh_dir().join(format!("{index:02}.stl"))
    }

    /// Layout program of a batch.
    #[must_use]
    pub fn batch_layout_path(&self, index: usize) -> PathBuf {
        self.batch_layout_dir().join(batch_file_name(index, "scad"))
    }

    /// Mesh file of a batch.
    #[must_use]
    pub fn batch_mesh_path(&self, index: usize) -> PathBuf {
        self.batch_mesh_dir().join(batch_file_name(index, "stl"))
    }

    /// Built-in part program location.
    #[must_use]
    pub fn part_program_path(&self) -> PathBuf {
        self.root.join(PART_PROGRAM_FILE)
    }

    /// Outline path as written into a batch layout program, relative to the
    /// layout directory. Always uses `/` so layouts are identical across
    /// platforms.
    #[must_use]
    pub fn outline_import_path(&self, index: usize) -> String {
        format!("../{OUTLINE_DIR}/{}", outline_file_name(index))
    }
}
