//! Threshold-bounded edit distance for approximate dictionary lookup.

use crate::error::{Result, VocabError};

/// Sentinel returned by [`checked_distance`] when the distance exceeds the threshold.
pub const NO_MATCH: i64 = -1;

/// Levenshtein distance between `a` and `b`, or `None` if it exceeds `threshold`.
///
/// Only the diagonal band `|i - j| <= threshold` of the DP matrix is evaluated,
/// so the work is `O(n * min(m, threshold))`. Lengths are counted in chars.
pub fn bounded_distance(a: &str, b: &str, threshold: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }

    let mut short: Vec<char> = a.chars().collect();
    let mut long: Vec<char> = b.chars().collect();
    if short.len() > long.len() {
        std::mem::swap(&mut short, &mut long);
    }

    let n = short.len();
    let m = long.len();

    if n == 0 {
        return (m <= threshold).then_some(m);
    }
    if m - n > threshold {
        return None;
    }

    // Rows are indexed by position in the shorter string; out-of-band cells hold MAX.
    let mut prev: Vec<usize> = (0..=n)
        .map(|i| if i <= threshold { i } else { usize::MAX })
        .collect();
    let mut curr = vec![usize::MAX; n + 1];

    for j in 1..=m {
        let long_char = long[j - 1];
        let band_start = j.saturating_sub(threshold).max(1);
        let band_end = n.min(j.saturating_add(threshold));

        curr[0] = j;
        if band_start > 1 {
            curr[band_start - 1] = usize::MAX;
        }

        let mut row_min = if band_start == 1 { curr[0] } else { usize::MAX };

        for i in band_start..=band_end {
            curr[i] = if short[i - 1] == long_char {
                prev[i - 1]
            } else {
                curr[i - 1] // insertion
                    .min(prev[i]) // deletion
                    .min(prev[i - 1]) // substitution
                    .saturating_add(1)
            };
            row_min = row_min.min(curr[i]);
        }

        if row_min > threshold {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    (distance <= threshold).then_some(distance)
}

/// Sentinel-returning form of [`bounded_distance`] for callers that may pass nulls.
///
/// Returns the distance when it is within `threshold` and [`NO_MATCH`] otherwise.
/// Fails with [`VocabError::InvalidParameter`] on a missing string or a negative threshold.
pub fn checked_distance(a: Option<&str>, b: Option<&str>, threshold: i64) -> Result<i64> {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(VocabError::InvalidParameter(
                "edit distance operands must not be null".to_string(),
            ))
        }
    };
    let threshold = usize::try_from(threshold).map_err(|_| {
        VocabError::InvalidParameter(format!(
            "edit distance threshold must be >= 0, got {threshold}"
        ))
    })?;

    Ok(bounded_distance(a, b, threshold).map_or(NO_MATCH, |d| d as i64))
}
