//! Writes report documents as pretty-printed JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::model::{FeatureStatsCollection, InterpretedReport};
use crate::sink::ReportSink;
use crate::summary::Summary;

/// Serializes `value` as pretty JSON to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let mut content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    content.push('\n');
    fs::write(path, content)
        .with_context(|| format!("Failed to write JSON: {}", path.display()))?;
    info!(path = %path.display(), "wrote report document");
    Ok(())
}

/// A sink that writes one JSON document per view into `out_dir`.
///
/// - `<name>_<language>_detailed_report.json`
/// - `<name>_<language>_features_stats.json`
/// - `index.json`
#[derive(Debug, Clone)]
pub struct JsonSink {
    out_dir: PathBuf,
}

impl JsonSink {
    /// Creates a sink writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn document(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{}.json", stem))
    }
}

impl ReportSink for JsonSink {
    fn detailed(&mut self, report: &InterpretedReport) -> Result<()> {
        let stem = format!("{}_detailed_report", report.parser.slug());
        write_json(&self.document(&stem), report)
    }

    fn features(&mut self, features: &FeatureStatsCollection) -> Result<()> {
        let stem = format!("{}_features_stats", features.parser.slug());
        write_json(&self.document(&stem), features)
    }

    fn summary(&mut self, summary: &Summary) -> Result<()> {
        write_json(&self.document("index"), summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParserIdentity;

    #[test]
    fn writes_documents_named_after_the_parser() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("nested").join("out");
        let mut sink = JsonSink::new(&out);
        let report = InterpretedReport {
            parser: ParserIdentity {
                name: "webapi-parser".to_string(),
                language: "js".to_string(),
                url: "https://github.com/raml-org/webapi-parser".to_string(),
                version: "^0.5.0".to_string(),
            },
            results: Vec::new(),
        };

        sink.detailed(&report)?;
        sink.summary(&Summary::new())?;

        let detailed = out.join("webapi-parser_js_detailed_report.json");
        let text = fs::read_to_string(&detailed)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        assert_eq!(value["parser"]["name"], "webapi-parser");
        assert!(out.join("index.json").exists());
        assert_eq!(sink.out_dir(), out.as_path());
        Ok(())
    }
}
