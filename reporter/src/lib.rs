//! TCK reporter core.
//!
//! Turns raw conformance-test results of grammar/parser TCK runs into
//! classified and summarized data, per parser and per feature area. The
//! output is handed to a [`ReportSink`]; rendering is the sink's business.
//!
//! # Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Invalid/optional classification from the path | [`classify`] |
//! | Success inversion, file URL, feature key | [`interpret`] |
//! | Valid/invalid/optional/all tallies | [`stats`] |
//! | Per-feature tallies in first-seen order | [`features`] |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::PathBuf;
//! use tck_reporter::{generate, sink::MemorySink, ReportOptions};
//!
//! let options = ReportOptions {
//!     repo_branch_url: Some("https://github.com/raml-org/raml-tck/blob/master".to_string()),
//! };
//! let mut sink = MemorySink::default();
//! let summary = generate(&[PathBuf::from("reports/webapi-parser.json")], &options, &mut sink)
//!     .expect("report run failed");
//! assert_eq!(summary.len(), sink.detailed.len());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod error;
pub mod features;
pub mod interpret;
pub mod load;
pub mod model;
pub mod sink;
pub mod stats;
pub mod summary;
pub mod writer;

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

pub use error::{LoadError, ReportError};
pub use model::{
    FeatureStatsCollection, InterpretedReport, InterpretedResult, ParserIdentity, RawReport,
    RawResult, Stats, Tally,
};
pub use sink::ReportSink;
pub use summary::{ParserReport, Summary};

/// Extension of the report files a run considers.
const REPORT_EXTENSION: &str = "json";

/// Options of a report run.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Branch URL of the TCK repository, e.g.
    /// `https://github.com/USER/REPO/blob/BRANCH`. Used to link test files.
    pub repo_branch_url: Option<String>,
}

impl ReportOptions {
    /// Returns the branch URL, treating an empty string as unset.
    pub fn repo_branch_url(&self) -> Option<&str> {
        self.repo_branch_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Processes every report in `paths` and hands the results to `sink`.
///
/// Paths without a `.json` extension are skipped. A report that cannot be
/// loaded is logged and skipped; the remaining reports are still processed.
/// The summary passed to the sink, and returned, lists the whole-report
/// statistics of every processed report in input order.
///
/// # Errors
///
/// Returns [`ReportError::Sink`] if the sink rejects a document.
pub fn generate<S: ReportSink>(
    paths: &[PathBuf],
    options: &ReportOptions,
    sink: &mut S,
) -> Result<Summary, ReportError> {
    let mut summary = Summary::new();

    for path in paths {
        if !is_report_file(path) {
            debug!(path = %path.display(), "skipping non-JSON input");
            continue;
        }
        info!(path = %path.display(), "processing report");

        let raw = match load::read_report(path) {
            Ok(raw) => raw,
            Err(err) => {
                error!(path = %path.display(), error = %err, "skipping invalid report");
                continue;
            }
        };

        let report = ParserReport::process(&raw, options.repo_branch_url());
        debug!(
            parser = %report.stats.parser.label(),
            results = report.stats.all.total,
            features = report.features.stats.len(),
            "report interpreted"
        );

        sink.detailed(&report.detailed).map_err(ReportError::Sink)?;
        sink.features(&report.features).map_err(ReportError::Sink)?;
        summary.push(report.stats);
    }

    sink.summary(&summary).map_err(ReportError::Sink)?;
    Ok(summary)
}

fn is_report_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(REPORT_EXTENSION)
}
