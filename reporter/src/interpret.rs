//! Result interpreter: turns raw runner output into interpreted results.
//!
//! For every raw result, in order:
//! 1. classify the file as invalid and/or optional;
//! 2. for invalid files, invert `success` and replace the error;
//! 3. strip one leading `/` from the path;
//! 4. build the repository link from the branch URL;
//! 5. derive the feature key from the first three directory segments.

use crate::classify::{is_invalid, is_optional};
use crate::model::{InterpretedReport, InterpretedResult, RawReport, RawResult};

/// Error attached to an invalid file that the parser accepted.
pub const INVALID_SUCCEEDED: &str = "Parsing expected to fail but succeeded";

/// Number of leading directory segments that make up a feature key.
const FEATURE_DEPTH: usize = 3;

/// Interprets every result of `report`, preserving order and count.
///
/// `repo_branch_url` is the base used for `fileUrl`; `None` or an empty
/// string leaves every `fileUrl` empty.
pub fn interpret_report(report: &RawReport, repo_branch_url: Option<&str>) -> InterpretedReport {
    InterpretedReport {
        parser: report.parser.clone(),
        results: report
            .results
            .iter()
            .map(|result| interpret_result(result, repo_branch_url))
            .collect(),
    }
}

/// Interprets a single raw result.
pub fn interpret_result(raw: &RawResult, repo_branch_url: Option<&str>) -> InterpretedResult {
    let invalid = is_invalid(&raw.file);
    let optional = is_optional(&raw.file);

    let (success, error) = if invalid {
        let success = !raw.success;
        let error = (!success).then(|| INVALID_SUCCEEDED.to_string());
        (success, error)
    } else {
        (raw.success, raw.error.clone())
    };

    let file = raw.file.strip_prefix('/').unwrap_or(&raw.file).to_string();
    let file_url = match repo_branch_url {
        Some(base) if !base.is_empty() => format!("{}/{}", base, file),
        _ => String::new(),
    };
    let feature = feature_of(&file);

    InterpretedResult {
        file,
        success,
        error,
        invalid,
        optional,
        file_url,
        feature,
    }
}

/// Derives the feature key of a (leading-slash stripped) file path.
///
/// The directory of `file` is cut to its first three `/`-separated
/// segments. A file without a directory has an empty feature.
pub fn feature_of(file: &str) -> String {
    dirname(file)
        .split('/')
        .take(FEATURE_DEPTH)
        .collect::<Vec<_>>()
        .join("/")
}

/// Directory part of a slash-separated path. A root-level file keeps `/`.
fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => "",
    }
}
