//! Aggregate header distance
//!
//! Combines [`positional_displacement`] with the per-position
//! [`content_divergence`] of two header rows into one score:
//!
//! ```text
//! score = displacement(a, b) * Σ divergence[i]
//! ```
//!
//! The displacement is a single multiplier over the summed divergence, not a
//! per-position weight. Positions are paired strictly by index here, unlike
//! the value lookup the displacement does.

use crate::distance::{content_divergence, positional_displacement, token_len};
use serde::Serialize;

/// Intermediate values of one aggregate distance computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceBreakdown {
    /// Extended footrule distance of the two rows
    pub displacement: usize,
    /// Edit distance per position; trailing positions hold the surviving token's length
    pub divergence: Vec<usize>,
    pub divergence_sum: usize,
    pub score: usize,
}

/// Compute the aggregate distance and keep every intermediate value.
pub fn explain_distance<A, B>(a: &[A], b: &[B]) -> DistanceBreakdown
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let maxlen = a.len().max(b.len());

    let divergence: Vec<usize> = (0..maxlen)
        .map(|i| match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => content_divergence(x.as_ref(), y.as_ref()),
            (Some(x), None) => token_len(x.as_ref()),
            (None, Some(y)) => token_len(y.as_ref()),
            (None, None) => 0,
        })
        .collect();

    let divergence_sum: usize = divergence.iter().sum();
    let displacement = positional_displacement(a, b);

    DistanceBreakdown {
        displacement,
        divergence,
        divergence_sum,
        score: displacement.saturating_mul(divergence_sum),
    }
}

/// Aggregate structural distance between two header rows.
///
/// 0 means identical rows. Not symmetric in general, see
/// [`positional_displacement`].
pub fn aggregate_distance<A, B>(a: &[A], b: &[B]) -> usize
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    explain_distance(a, b).score
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASELINE: [&str; 5] = ["Date", "Time", "ZIP", "Address", "Reason"];

    #[test]
    fn test_swapped_columns() {
        let candidate = ["Time", "Date", "ZIP", "Address", "Reason"];
        let breakdown = explain_distance(&BASELINE, &candidate);
        assert_eq!(breakdown.displacement, 2);
        assert_eq!(breakdown.divergence, vec![3, 3, 0, 0, 0]);
        assert_eq!(breakdown.divergence_sum, 6);
        assert_eq!(breakdown.score, 12);
    }

    #[test]
    fn test_renamed_column() {
        let candidate = ["Date1", "Time", "ZIP", "Address", "Reason"];
        let breakdown = explain_distance(&BASELINE, &candidate);
        assert_eq!(breakdown.displacement, 5);
        assert_eq!(breakdown.divergence_sum, 1);
        assert_eq!(breakdown.score, 5);
    }

    #[test]
    fn test_longer_candidate() {
        let candidate = ["Date", "Time", "ZIP", "Address", "Reason", "Comment"];
        let breakdown = explain_distance(&BASELINE, &candidate);
        assert_eq!(breakdown.divergence, vec![0, 0, 0, 0, 0, 7]);
        // Only the baseline is iterated, every baseline token matches in place
        assert_eq!(breakdown.displacement, 0);
        assert_eq!(breakdown.score, 0);

        // Iterated from the longer side the extra token is penalized with max(6, 5)
        let reversed = explain_distance(&candidate, &BASELINE);
        assert_eq!(reversed.displacement, 6);
        assert_eq!(reversed.divergence_sum, 7);
        assert_eq!(reversed.score, 42);
    }

    #[test]
    fn test_identity() {
        assert_eq!(aggregate_distance(&BASELINE, &BASELINE), 0);
    }

    #[test]
    fn test_empty_rows() {
        let empty: [&str; 0] = [];
        assert_eq!(aggregate_distance(&empty, &empty), 0);

        let breakdown = explain_distance(&BASELINE, &empty);
        assert_eq!(breakdown.displacement, 5 * 5);
        assert_eq!(breakdown.divergence, vec![4, 4, 3, 7, 6]);
        assert_eq!(breakdown.score, 25 * 24);
    }

    #[test]
    fn test_duplicate_asymmetry() {
        let a = ["id", "name"];
        let b = ["id", "id", "name"];
        // a->b: displacement 1, divergence [0, 4 ("name" vs "id"), 4] = 8
        assert_eq!(aggregate_distance(&a, &b), 8);
        // b->a: displacement 2, same divergence
        assert_eq!(aggregate_distance(&b, &a), 16);
    }

    #[test]
    fn test_breakdown_serialization() {
        let breakdown = explain_distance(&["a"], &["b"]);
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "displacement": 1,
                "divergence": [1],
                "divergenceSum": 1,
                "score": 1
            })
        );
    }
}
