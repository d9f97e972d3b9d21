//! Distance primitives for header comparison
//!
//! Two measures feed the aggregate header distance:
//! - [`content_divergence`] - edit distance between two field names
//! - [`positional_displacement`] - footrule-style distance between two header rows

/// Levenshtein distance between two tokens.
///
/// Counts single-character insertions, deletions and substitutions, each at
/// unit cost. Characters are Unicode scalar values, so `"ö"` vs `"o"` is 1,
/// not a byte-level count.
///
/// # Returns
/// 0 for identical tokens, the character count of the other token when one is empty
pub fn content_divergence(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows over b
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Extended Spearman footrule distance between two header rows.
///
/// Every token of `a` is looked up in `b` by exact equality. The first (lowest
/// index) match contributes `|i_a - i_b|`; a token with no match anywhere in
/// `b` contributes `max(len(a), len(b))`.
///
/// Only `a` is iterated. Tokens that exist in `b` alone are not penalized on
/// their own, so `positional_displacement(a, b)` and
/// `positional_displacement(b, a)` can differ when the rows hold duplicates or
/// unmatched tokens. Duplicate values in `b` always resolve to their earliest
/// occurrence; no optimal assignment is attempted.
pub fn positional_displacement<A, B>(a: &[A], b: &[B]) -> usize
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let penalty = a.len().max(b.len());

    a.iter()
        .enumerate()
        .map(|(i1, token)| {
            let token = token.as_ref();
            match b.iter().position(|other| other.as_ref() == token) {
                Some(i2) => i1.abs_diff(i2),
                None => penalty,
            }
        })
        .sum()
}

/// Character count of a token, i.e. its divergence from an empty token
pub fn token_len(token: &str) -> usize {
    token.chars().count()
}
