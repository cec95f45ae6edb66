//! The seam between the reporter and whatever renders its output.

use anyhow::Result;

use crate::model::{FeatureStatsCollection, InterpretedReport};
use crate::summary::Summary;

/// Receives the documents produced by a report run.
///
/// For every processed report, [`detailed`](ReportSink::detailed) is called
/// before [`features`](ReportSink::features). [`summary`](ReportSink::summary)
/// is called once, after the last report.
pub trait ReportSink {
    /// Receives the interpreted results of one parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be emitted.
    fn detailed(&mut self, report: &InterpretedReport) -> Result<()>;

    /// Receives the per-feature statistics of one parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be emitted.
    fn features(&mut self, features: &FeatureStatsCollection) -> Result<()>;

    /// Receives the whole-report statistics of every processed parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be emitted.
    fn summary(&mut self, summary: &Summary) -> Result<()>;
}

/// A sink that keeps every document in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Detailed reports, in the order received.
    pub detailed: Vec<InterpretedReport>,
    /// Feature collections, in the order received.
    pub features: Vec<FeatureStatsCollection>,
    /// The summary, once received.
    pub summary: Option<Summary>,
}

impl ReportSink for MemorySink {
    fn detailed(&mut self, report: &InterpretedReport) -> Result<()> {
        self.detailed.push(report.clone());
        Ok(())
    }

    fn features(&mut self, features: &FeatureStatsCollection) -> Result<()> {
        self.features.push(features.clone());
        Ok(())
    }

    fn summary(&mut self, summary: &Summary) -> Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}
