//! Per-parser processing results and the cross-parser summary.

use serde::{Deserialize, Serialize};

use crate::features::compose_features_stats;
use crate::interpret::interpret_report;
use crate::model::{FeatureStatsCollection, InterpretedReport, RawReport, Stats};
use crate::stats::compose_report_stats;

/// Everything derived from one raw report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserReport {
    /// Interpreted results, for the detailed view.
    pub detailed: InterpretedReport,
    /// Whole-report statistics, for the summary view.
    pub stats: Stats,
    /// Per-feature statistics, for the features view.
    pub features: FeatureStatsCollection,
}

impl ParserReport {
    /// Interprets `raw` and aggregates its statistics.
    pub fn process(raw: &RawReport, repo_branch_url: Option<&str>) -> Self {
        let detailed = interpret_report(raw, repo_branch_url);
        let stats = compose_report_stats(&detailed.parser, &detailed.results);
        let features = compose_features_stats(&detailed);
        Self {
            detailed,
            stats,
            features,
        }
    }
}

/// Whole-report statistics of every processed parser, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// One entry per parser.
    pub stats: Vec<Stats>,
}

impl Summary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the statistics of one parser.
    pub fn push(&mut self, stats: Stats) {
        self.stats.push(stats);
    }

    /// Returns the number of parsers in the summary.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Returns true if no parser has been processed.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
