//! TCK report types: parser identity, raw and interpreted results, and statistics.

use serde::{Deserialize, Serialize};

/// Identity of the parser a report was produced for.
///
/// Carried through unchanged; only used as a label on derived structures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserIdentity {
    /// Parser name, e.g. `webapi-parser`.
    pub name: String,
    /// Implementation language, e.g. `js`.
    pub language: String,
    /// Project homepage.
    pub url: String,
    /// Version or version range the TCK ran against.
    pub version: String,
}

impl ParserIdentity {
    /// Returns `<name>_<language>`, the stem used for per-parser artifact names.
    pub fn slug(&self) -> String {
        format!("{}_{}", self.name, self.language)
    }

    /// Returns `<name> (<language>, <version>)`, the human-readable label.
    pub fn label(&self) -> String {
        format!("{} ({}, {})", self.name, self.language, self.version)
    }
}

/// A single raw test result as emitted by the TCK runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    /// Slash-separated path of the TCK input file.
    pub file: String,
    /// Whether the parser accepted the file.
    pub success: bool,
    /// Parser error message, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A raw report: one parser and the results of running it over the TCK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReport {
    /// The parser the results belong to.
    pub parser: ParserIdentity,
    /// Results in runner order.
    pub results: Vec<RawResult>,
}

/// A raw result after invalid/optional classification and success inversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretedResult {
    /// File path with a single leading `/` removed.
    pub file: String,
    /// Whether the test passed, taking expected failures into account.
    pub success: bool,
    /// Failure message. Present iff `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The file is expected to fail parsing.
    pub invalid: bool,
    /// The file is tracked separately from mandatory conformance.
    #[serde(default)]
    pub optional: bool,
    /// Link to the file in the TCK repository, or empty.
    pub file_url: String,
    /// Grouping key derived from the file's directory.
    pub feature: String,
}

/// An interpreted report, one [`InterpretedResult`] per raw result in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedReport {
    /// The parser the results belong to.
    pub parser: ParserIdentity,
    /// Interpreted results in runner order.
    pub results: Vec<InterpretedResult>,
}

/// Pass/total counts of one partition of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    /// Number of passing results.
    pub success: usize,
    /// Number of results in the partition.
    pub total: usize,
    /// `success / total` as a rounded percentage; 100 for an empty partition.
    pub success_perc: u32,
}

/// Partitioned statistics of a whole report or of one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// The parser the statistics describe.
    pub parser: ParserIdentity,
    /// Results not expected to fail.
    pub valid: Tally,
    /// Results expected to fail.
    pub invalid: Tally,
    /// Optional results, independent of the valid/invalid split.
    pub optional: Tally,
    /// Every result.
    pub all: Tally,
    /// Feature label when the statistics describe a feature subset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
}

/// Per-feature statistics of one parser, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStatsCollection {
    /// The parser the statistics describe.
    pub parser: ParserIdentity,
    /// One entry per distinct feature.
    pub stats: Vec<Stats>,
}
