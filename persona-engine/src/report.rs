use persona_core::{CoreError, PersonaReport};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const BANNER: &str = "==================================================";

/// Persists finished persona reports as timestamped text files.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write the report to `<output_dir>/<username>_persona_<YYYYMMDD_HHMMSS>.txt`.
    /// The directory is created if absent. Filesystem failures surface
    /// unmodified.
    pub fn write(&self, report: &PersonaReport) -> Result<PathBuf, CoreError> {
        fs::create_dir_all(&self.output_dir)?;

        let filename = format!(
            "{}_persona_{}.txt",
            report.username,
            report.generated_at.format("%Y%m%d_%H%M%S")
        );
        let path = self.output_dir.join(filename);

        fs::write(&path, render(report))?;
        info!("Persona saved to: {}", path.display());
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn render(report: &PersonaReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "REDDIT USER PERSONA ANALYSIS");
    let _ = writeln!(out, "{}\n", BANNER);
    let _ = writeln!(out, "Username: {}", report.username);
    let _ = writeln!(
        out,
        "Analysis Date: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "Posts Analyzed: {}", report.posts_analyzed);
    let _ = writeln!(out, "Comments Analyzed: {}", report.comments_analyzed);
    let _ = writeln!(out, "\n{}\n", BANNER);
    out.push_str(&report.body);
    let _ = write!(out, "\n\n{}\nANALYSIS COMPLETE\n", BANNER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn sample_report() -> PersonaReport {
        PersonaReport {
            username: "alice".to_string(),
            generated_at: Local.with_ymd_and_hms(2024, 3, 15, 9, 30, 5).unwrap(),
            posts_analyzed: 2,
            comments_analyzed: 1,
            body: "A curious, detail-oriented user.".to_string(),
        }
    }

    #[test]
    fn test_filename_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let path = writer.write(&sample_report()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "alice_persona_20240315_093005.txt"
        );
        assert!(path.exists());
    }

    #[test]
    fn test_report_contents() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let path = writer.write(&sample_report()).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("REDDIT USER PERSONA ANALYSIS\n"));
        assert!(contents.contains("Username: alice\n"));
        assert!(contents.contains("Analysis Date: 2024-03-15 09:30:05\n"));
        assert!(contents.contains("Posts Analyzed: 2\n"));
        assert!(contents.contains("Comments Analyzed: 1\n"));
        assert!(contents.contains("A curious, detail-oriented user."));
        assert!(contents.ends_with("ANALYSIS COMPLETE\n"));
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports").join("personas");
        let writer = ReportWriter::new(&nested);

        let path = writer.write(&sample_report()).unwrap();
        assert!(nested.is_dir());
        assert!(path.starts_with(&nested));

        // Second write into the now-existing directory still succeeds.
        writer.write(&sample_report()).unwrap();
    }
}
