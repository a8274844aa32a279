//! Render job descriptions.

use std::ffi::OsString;
use std::path::PathBuf;

use serde_json::Value;

/// One invocation of the render engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    /// Human readable name used in logs and errors.
    pub label: String,

    /// Program the engine renders.
    pub input: PathBuf,

    /// Mesh file the engine writes.
    pub output: PathBuf,

    /// Variable overrides, passed as JSON literals in insertion order.
    pub overrides: Vec<(String, Value)>,
}

impl RenderJob {
    /// A job without overrides.
    #[must_use]
    pub fn new(label: impl Into<String>, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            input: input.into(),
            output: output.into(),
            overrides: Vec::new(),
        }
    }

    /// Mesh job for one profile: runs the part program on its outline.
    #[must_use]
    pub fn part(
        index: usize,
        program: impl Into<PathBuf>,
        outline: impl Into<PathBuf>,
        mesh: impl Into<PathBuf>,
        extrusion: f64,
    ) -> Self {
        let outline: PathBuf = outline.into();
        Self::new(format!("part {index:02}"), program, mesh)
            .with_override("dxf", outline.to_string_lossy().into_owned())
            .with_override("height", extrusion)
    }

    /// Mesh job for one batch layout program.
    #[must_use]
    pub fn batch(index: usize, layout: impl Into<PathBuf>, mesh: impl Into<PathBuf>) -> Self {
        Self::new(format!("batch {index:02}"), layout, mesh)
    }

    /// Add a variable override (builder pattern).
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Engine command line arguments.
    #[must_use]
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(3 + 2 * self.overrides.len());
        args.push(OsString::from("-o"));
        args.push(self.output.clone().into_os_string());
        for (key, value) in &self.overrides {
            args.push(OsString::from("-D"));
            args.push(OsString::from(format!("{key}={value}")));
        }
        args.push(self.input.clone().into_os_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(job: &RenderJob) -> Vec<String> {
        job.args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_batch_job_has_no_overrides() {
        let job = RenderJob::batch(2, "batch_scad/batch_02.scad", "batch_stl/batch_02.stl");
        assert_eq!(job.label, "batch 02");
        assert_eq!(
            strings(&job),
            ["-o", "batch_stl/batch_02.stl", "batch_scad/batch_02.scad"]
        );
    }

    #[test]
    fn test_overrides_are_json_literals() {
        let job = RenderJob::new("custom", "in.scad", "out.stl")
            .with_override("name", "say \"hi\"")
            .with_override("count", 3)
            .with_override("flag", true);
        assert_eq!(
            strings(&job),
            [
                "-o",
                "out.stl",
                "-D",
                r#"name="say \"hi\"""#,
                "-D",
                "count=3",
                "-D",
                "flag=true",
                "in.scad"
            ]
        );
    }

    #[test]
    fn test_part_job() {
        let job = RenderJob::part(7, "/out/part.scad", "/out/dxf/07.dxf", "/out/stl/07.stl", 2.0);
        assert_eq!(job.label, "part 07");
        assert_eq!(job.overrides[0].1, Value::from("/out/dxf/07.dxf"));
        assert_eq!(job.overrides[1].1, Value::from(2.0));
        assert!(strings(&job).contains(&"height=2.0".to_string()));
    }
}
