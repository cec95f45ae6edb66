//! Statistics aggregator: pass/total counts and percentages per partition.

use crate::model::{InterpretedResult, ParserIdentity, Stats, Tally};

/// Calculates `success / total` as a percentage rounded half-up.
///
/// An empty partition (`0 / 0`) is reported as 100.
pub fn success_perc(success: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let success = success as u64;
    let total = total as u64;
    ((success * 200 + total) / (total * 2)) as u32
}

impl Tally {
    /// Counts the results yielded by `results`.
    pub fn count<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a InterpretedResult>,
    {
        let (success, total) = results
            .into_iter()
            .fold((0, 0), |(success, total), r| (success + usize::from(r.success), total + 1));
        Self {
            success,
            total,
            success_perc: success_perc(success, total),
        }
    }
}

/// Composes the statistics of `results` for `parser`.
///
/// `valid` and `invalid` split the results in two; `optional` is counted
/// independently, so a result can be in both `invalid` and `optional`.
pub fn compose_report_stats(parser: &ParserIdentity, results: &[InterpretedResult]) -> Stats {
    compose_stats(parser, results.iter())
}

/// Same as [`compose_report_stats`] over any re-iterable sequence of results.
pub fn compose_stats<'a, I>(parser: &ParserIdentity, results: I) -> Stats
where
    I: Iterator<Item = &'a InterpretedResult> + Clone,
{
    Stats {
        parser: parser.clone(),
        valid: Tally::count(results.clone().filter(|r| !r.invalid)),
        invalid: Tally::count(results.clone().filter(|r| r.invalid)),
        optional: Tally::count(results.clone().filter(|r| r.optional)),
        all: Tally::count(results),
        feature: None,
    }
}
