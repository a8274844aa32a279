//! DXF outline export.
//!
//! Each profile is written as a minimal DXF file holding one closed
//! `LWPOLYLINE` in millimetres. Coordinates are printed exactly as stored in
//! the profile, so the file agrees with the reported width and height.

use std::fmt::Write;
use std::path::Path;

use ridge_types::Profile;
use tracing::debug;

use crate::{IoResult, write_text};

/// DXF `$INSUNITS` code for millimetres.
const UNITS_MILLIMETERS: u8 = 4;

/// Render a profile outline as DXF text.
///
/// # Example
///
/// ```
/// use ridge_types::{Point2, Profile};
/// use ridge_io::outline_dxf;
///
/// let profile = Profile::from_points(vec![Point2::new(0.0, 1.0), Point2::new(5.0, 2.5)]);
/// let dxf = outline_dxf(&profile);
/// assert!(dxf.contains("LWPOLYLINE"));
/// assert!(dxf.ends_with("EOF\n"));
/// ```
#[must_use]
pub fn outline_dxf(profile: &Profile) -> String {
    let mut out = String::new();

    push_pair(&mut out, 0, "SECTION");
    push_pair(&mut out, 2, "HEADER");
    push_pair(&mut out, 9, "$INSUNITS");
    push_pair(&mut out, 70, UNITS_MILLIMETERS);
    push_pair(&mut out, 0, "ENDSEC");

    push_pair(&mut out, 0, "SECTION");
    push_pair(&mut out, 2, "ENTITIES");
    push_pair(&mut out, 0, "LWPOLYLINE");
    push_pair(&mut out, 8, "0");
    push_pair(&mut out, 90, profile.outline.len());
    // Closed polyline flag
    push_pair(&mut out, 70, 1);
    for point in &profile.outline {
        push_pair(&mut out, 10, point.x);
        push_pair(&mut out, 20, point.y);
    }
    push_pair(&mut out, 0, "ENDSEC");
    push_pair(&mut out, 0, "EOF");

    out
}

/// Write a profile outline to a DXF file.
///
/// # Errors
///
/// Returns [`IoError::Write`](crate::IoError::Write) if the file cannot be
/// created or written.
pub fn save_outline<P: AsRef<Path>>(profile: &Profile, path: P) -> IoResult<()> {
    let path = path.as_ref();
    write_text(path, &outline_dxf(profile))?;
    debug!(path = %path.display(), vertices = profile.outline.len(), "Outline written");
    Ok(())
}

fn push_pair(out: &mut String, code: u16, value: impl std::fmt::Display) {
    // Writing to a String cannot fail
    let _ = write!(out, "{code}\n{value}\n");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn sample_profile() -> Profile {
        Profile::from_points(vec![
            Point2::new(0.0, 3.0),
            Point2::new(5.0, 8.25),
            Point2::new(10.0, 3.0),
        ])
    }

    #[test]
    fn test_header_and_units() {
        let dxf = outline_dxf(&sample_profile());
        assert!(dxf.starts_with("0\nSECTION\n2\nHEADER\n9\n$INSUNITS\n70\n4\n"));
    }

    #[test]
    fn test_vertices_written_in_order() {
        let dxf = outline_dxf(&sample_profile());
        let lines: Vec<&str> = dxf.lines().collect();

        let count_at = lines.iter().position(|&l| l == "90").unwrap();
        assert_eq!(lines[count_at + 1], "6");

        let coords: Vec<&str> = lines
            .chunks(2)
            .filter(|pair| pair[0] == "10" || pair[0] == "20")
            .map(|pair| pair[1])
            .collect();
        assert_eq!(
            coords,
            vec!["0", "0", "0", "3", "5", "8.25", "10", "3", "10", "0", "0", "0"]
        );
    }

    #[test]
    fn test_save_outline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("00.dxf");
        save_outline(&sample_profile(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, outline_dxf(&sample_profile()));
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("00.dxf");
        assert!(matches!(
            save_outline(&sample_profile(), &path),
            Err(crate::IoError::Write { .. })
        ));
    }
}
