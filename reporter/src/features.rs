//! Feature grouper: per-feature statistics of an interpreted report.

use std::collections::HashMap;

use crate::model::{FeatureStatsCollection, InterpretedReport, InterpretedResult};
use crate::stats::compose_stats;

/// Groups results by `feature`, in the order each feature first appears.
///
/// Results keep their relative order inside each group.
pub fn group_by_feature(results: &[InterpretedResult]) -> Vec<(&str, Vec<&InterpretedResult>)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&InterpretedResult>)> = Vec::new();

    for result in results {
        let feature = result.feature.as_str();
        let idx = *positions.entry(feature).or_insert_with(|| {
            groups.push((feature, Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(result);
    }

    groups
}

/// Composes one [`Stats`](crate::model::Stats) per feature of `report`.
pub fn compose_features_stats(report: &InterpretedReport) -> FeatureStatsCollection {
    let stats = group_by_feature(&report.results)
        .into_iter()
        .map(|(feature, members)| {
            let mut stats = compose_stats(&report.parser, members.iter().copied());
            stats.feature = Some(feature.to_string());
            stats
        })
        .collect();

    FeatureStatsCollection {
        parser: report.parser.clone(),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParserIdentity;

    fn result(file: &str, feature: &str) -> InterpretedResult {
        InterpretedResult {
            file: file.to_string(),
            success: true,
            error: None,
            invalid: false,
            optional: false,
            file_url: String::new(),
            feature: feature.to_string(),
        }
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let results = vec![
            result("b/1", "b"),
            result("a/1", "a"),
            result("b/2", "b"),
            result("c/1", "c"),
            result("a/2", "a"),
        ];
        let groups = group_by_feature(&results);
        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        let b: Vec<_> = groups[0].1.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(b, vec!["b/1", "b/2"]);
    }

    #[test]
    fn empty_feature_is_its_own_group() {
        let results = vec![result("x.raml", ""), result("a/y.raml", "a")];
        let groups = group_by_feature(&results);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "");
    }

    #[test]
    fn feature_stats_carry_label_and_parser() {
        let report = InterpretedReport {
            parser: ParserIdentity {
                name: "p".to_string(),
                language: "rs".to_string(),
                url: "https://example.org".to_string(),
                version: "0.1".to_string(),
            },
            results: vec![result("a/1", "a"), result("b/1", "b"), result("a/2", "a")],
        };
        let collection = compose_features_stats(&report);
        assert_eq!(collection.parser, report.parser);
        assert_eq!(collection.stats.len(), 2);
        assert_eq!(collection.stats[0].feature.as_deref(), Some("a"));
        assert_eq!(collection.stats[0].all.total, 2);
        assert_eq!(collection.stats[1].feature.as_deref(), Some("b"));
        assert_eq!(collection.stats[1].all.total, 1);
    }
}
