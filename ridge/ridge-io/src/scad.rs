//! OpenSCAD programs for parts and batches.

use std::fmt::Write;
use std::path::Path;

use ridge_layout::Batch;
use tracing::debug;

use crate::{IoResult, write_text};

/// Program that extrudes one outline.
///
/// The render engine overrides `dxf` (outline path) and `height`
/// (extrusion height) on its command line.
pub const PART_PROGRAM: &str = r#"// Ridgeline part program.
// Overridden per part: dxf (outline file), height (extrusion in mm).
dxf = "";
height = 1;

linear_extrude(height = height)
import(dxf);
"#;

/// Write [`PART_PROGRAM`] to `path`.
///
/// # Errors
///
/// Returns [`IoError::Write`](crate::IoError::Write) on failure.
pub fn write_part_program<P: AsRef<Path>>(path: P) -> IoResult<()> {
    write_text(path.as_ref(), PART_PROGRAM)
}

/// Render the layout program for one batch.
///
/// Every placement contributes four statements, in placement order: flip,
/// translate to its offset, extrude by `extrusion`, import its outline.
/// `import_path` maps a profile index to the outline path written into the
/// program.
///
/// # Example
///
/// ```
/// use ridge_layout::{PackParams, pack_heights};
/// use ridge_io::batch_layout;
///
/// let batches = pack_heights(&[50.0], &PackParams::default()).unwrap();
/// let scad = batch_layout(&batches[0], 3.2, |i| format!("../dxf/{i:02}.dxf"));
/// assert_eq!(
///     scad,
///     "rotate([180, 0, 0])\n\
///      translate([10, -57, -3.2])\n\
///      linear_extrude(height = 3.2)\n\
///      import(\"../dxf/00.dxf\");\n"
/// );
/// ```
#[must_use]
pub fn batch_layout<F>(batch: &Batch, extrusion: f64, import_path: F) -> String
where
    F: Fn(usize) -> String,
{
    let mut out = String::new();
    for placement in &batch.placements {
        let [rx, ry, rz] = placement.rotation();
        let t = placement.translation(extrusion);
        // Writing to a String cannot fail
        let _ = writeln!(out, "rotate([{rx}, {ry}, {rz}])");
        let _ = writeln!(out, "translate([{}, {}, {}])", t.x, t.y, t.z);
        let _ = writeln!(out, "linear_extrude(height = {extrusion})");
        let _ = writeln!(out, "import(\"{}\");", import_path(placement.profile));
    }
    out
}

/// Render and write the layout program for one batch.
///
/// # Errors
///
/// Returns [`IoError::Write`](crate::IoError::Write) on failure.
pub fn save_batch_layout<P, F>(batch: &Batch, extrusion: f64, import_path: F, path: P) -> IoResult<()>
where
    P: AsRef<Path>,
    F: Fn(usize) -> String,
{
    let path = path.as_ref();
    write_text(path, &batch_layout(batch, extrusion, import_path))?;
    debug!(
        path = %path.display(),
        batch = batch.index,
        parts = batch.len(),
        "Batch layout written"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ridge_layout::{PackParams, pack_heights};

    fn name(i: usize) -> String {
        format!("../dxf/{i:02}.dxf")
    }

    #[test]
    fn test_layout_statements_per_placement() {
        let params = PackParams::default()
            .with_bed_y(120.0)
            .with_margin_y(5.0)
            .with_spacing_y(2.0);
        let batches = pack_heights(&[50.0; 5], &params).unwrap();
        let scad = batch_layout(&batches[1], 2.0, name);
        let lines: Vec<&str> = scad.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "translate([10, -57, -2])");
        assert_eq!(lines[3], "import(\"../dxf/02.dxf\");");
        assert_eq!(lines[5], "translate([10, -109, -2])");
        assert_eq!(lines[7], "import(\"../dxf/03.dxf\");");
    }

    #[test]
    fn test_fractional_offsets() {
        let batches = pack_heights(&[12.3456], &PackParams::default()).unwrap();
        let scad = batch_layout(&batches[0], 3.2, name);
        assert!(scad.contains("translate([10, -19.3456, -3.2])"));
    }

    #[test]
    fn test_part_program_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("part.scad");
        write_part_program(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("linear_extrude(height = height)"));
        assert!(text.contains("import(dxf);"));
    }

    #[test]
    fn test_save_batch_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch_00.scad");
        let batches = pack_heights(&[10.0, 20.0], &PackParams::default()).unwrap();
        save_batch_layout(&batches[0], 1.0, name, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, batch_layout(&batches[0], 1.0, name));
        assert_eq!(text.matches("rotate([180, 0, 0])").count(), 2);
    }
}
