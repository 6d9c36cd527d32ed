//! Levenshtein distance, optionally restricted to a band around the main
//! diagonal of the DP grid.

use crate::number::UInt;

/// Computes the Levenshtein distance between two sequences.
///
/// The Levenshtein distance is defined as the minimum number of edits
/// needed to transform one sequence into the other, with the allowable
/// edit operations being insertion, deletion, or substitution of a
/// single symbol. It is named after Vladimir Levenshtein, who
/// considered this distance in 1965.
///
/// We use the Wagner-Fischer algorithm with penalty values of `1` for all
/// edit operations. Only two rows of the DP grid are kept, each as long as
/// the shorter sequence. Identical prefixes and suffixes are skipped before
/// the grid is filled in.
///
/// If `maxdiff` is `Some(k)`, a banded alignment is performed: only cells
/// within `k` of the main diagonal are computed, and the computation stops
/// early once every cell in a row exceeds `k`. In that case the true edit
/// distance is returned if and only if it is `k` or less. Otherwise `k + 1`
/// is returned, which is not necessarily the true edit distance. Callers
/// should only rely on the result being greater than `k`.
///
/// The input sequences are not required to be of the same length.
///
/// # Arguments
///
/// * `s` - The first sequence.
/// * `t` - The second sequence.
/// * `maxdiff` - The largest distance the caller cares about, if any.
///
/// # Examples
///
/// ```
/// use tinyalign::edit_distance;
///
/// let a = b"NAJIBEATSPEPPERS";
/// let b = b"NAJIBPEPPERSEATS";
///
/// let distance: u16 = edit_distance(a, b, None);
/// assert_eq!(distance, 8);
///
/// let distance: u16 = edit_distance(a, b, Some(8));
/// assert_eq!(distance, 8);
///
/// let distance: u16 = edit_distance(a, b, Some(7));
/// assert!(distance > 7);
///
/// let a = "TOMEATSWHATFOODEATS".chars().collect::<Vec<_>>();
/// let b = "FOODEATSWHATTOMEATS".chars().collect::<Vec<_>>();
///
/// let distance: u16 = edit_distance(&a, &b, None);
/// assert_eq!(distance, 6);
/// ```
///
/// # References
///
/// * [Levenshtein distance](https://en.wikipedia.org/wiki/Levenshtein_distance)
/// * [Ukkonen, 1985](https://doi.org/10.1016/S0019-9958(85)80046-2)
#[must_use]
pub fn edit_distance<T: Eq, U: UInt>(s: &[T], t: &[T], maxdiff: Option<usize>) -> U {
    U::from_usize(_edit_distance(s, t, maxdiff))
}

/// Returns whether the edit distance between `s` and `t` is at most `k`.
///
/// This uses the banded mode of [`edit_distance`], so the work done is
/// proportional to `k` times the length of the longer sequence.
///
/// # Examples
///
/// ```
/// use tinyalign::within_distance;
///
/// assert!(within_distance(b"ANANAS", b"BANANA", 2));
/// assert!(!within_distance(b"ANANAS", b"BANANA", 1));
/// ```
#[must_use]
pub fn within_distance<T: Eq>(s: &[T], t: &[T], k: usize) -> bool {
    _edit_distance(s, t, Some(k)) <= k
}

/// Helper for the edit distance.
fn _edit_distance<T: Eq>(s: &[T], t: &[T], maxdiff: Option<usize>) -> usize {
    // require that `s` is no longer than `t`
    let (s, t) = if s.len() <= t.len() { (s, t) } else { (t, s) };

    // the distance is at least the difference in lengths
    if let Some(k) = maxdiff {
        if t.len() - s.len() > k {
            return k + 1;
        }
    }

    let (s, t) = trim_common_affixes(s, t);
    if s.is_empty() {
        return t.len();
    }

    match maxdiff {
        // a band of half-width `k >= t.len()` covers the whole grid
        Some(k) if k < t.len() => banded(s, t, k),
        _ => unbanded(s, t),
    }
}

/// Strips the longest common prefix and then the longest common suffix.
fn trim_common_affixes<'a, T: Eq>(s: &'a [T], t: &'a [T]) -> (&'a [T], &'a [T]) {
    let prefix = s.iter().zip(t).take_while(|(a, b)| a == b).count();
    let (s, t) = (&s[prefix..], &t[prefix..]);

    let suffix = s.iter().rev().zip(t.iter().rev()).take_while(|(a, b)| a == b).count();
    (&s[..s.len() - suffix], &t[..t.len() - suffix])
}

/// Full DP over the grid. `s` must be no longer than `t`.
fn unbanded<T: Eq>(s: &[T], t: &[T]) -> usize {
    let mut prev = (0..=s.len()).collect::<Vec<_>>();
    let mut cur = vec![0; s.len() + 1];

    for (j, b) in t.iter().enumerate() {
        cur[0] = j + 1;
        for (i, a) in s.iter().enumerate() {
            cur[i + 1] = core::cmp::min(
                // match or substitution
                prev[i] + usize::from(a != b),
                core::cmp::min(
                    // deletion
                    prev[i + 1] + 1,
                    // insertion
                    cur[i] + 1,
                ),
            );
        }
        core::mem::swap(&mut prev, &mut cur);
    }

    prev[s.len()]
}

/// DP restricted to cells `(i, j)` with `|i - j| <= k`.
///
/// `s` must be no longer than `t`, with `t.len() - s.len() <= k < t.len()`.
/// Every cell is capped at `k + 1`, and cells just outside the band are set
/// to that cap so they never lower a cell inside it. The result is exact when
/// at most `k` and `k + 1` otherwise.
fn banded<T: Eq>(s: &[T], t: &[T], k: usize) -> usize {
    let m = s.len();
    let cap = k + 1;

    let mut prev = (0..=m).map(|i| i.min(cap)).collect::<Vec<_>>();
    let mut cur = vec![cap; m + 1];

    for (j, b) in (1..=t.len()).zip(t) {
        // columns of row `j` that lie inside the band
        let lo = j.saturating_sub(k);
        let hi = m.min(j + k);

        let mut smallest = if lo == 0 {
            cur[0] = j.min(cap);
            cur[0]
        } else {
            cur[lo - 1] = cap;
            cap
        };

        for i in lo.max(1)..=hi {
            let c = (prev[i - 1] + usize::from(s[i - 1] != *b))
                .min(prev[i] + 1)
                .min(cur[i - 1] + 1)
                .min(cap);
            cur[i] = c;
            smallest = smallest.min(c);
        }
        if hi < m {
            cur[hi + 1] = cap;
        }

        // costs never decrease from one row to the next
        if smallest == cap {
            return cap;
        }
        core::mem::swap(&mut prev, &mut cur);
    }

    prev[m]
}

#[cfg(test)]
mod tests {
    use super::{_edit_distance, trim_common_affixes};

    #[test]
    fn trims_prefix_and_suffix() {
        let (s, t) = trim_common_affixes(b"ABXCD", b"ABYYCD");
        assert_eq!(s, b"X");
        assert_eq!(t, b"YY");

        let (s, t) = trim_common_affixes(b"A", b"AA");
        assert!(s.is_empty());
        assert_eq!(t, b"A");

        let (s, t) = trim_common_affixes(b"ABC", b"ABC");
        assert!(s.is_empty() && t.is_empty());
    }

    #[test]
    fn band_of_width_zero() {
        assert_eq!(_edit_distance(b"ACGT", b"ACGT", Some(0)), 0);
        assert_eq!(_edit_distance(b"ACGT", b"AGGT", Some(0)), 1);
        assert_eq!(_edit_distance(b"ACGT", b"ACG", Some(0)), 1);
    }

    #[test]
    fn sentinel_is_one_past_the_band() {
        assert_eq!(_edit_distance(b"ABC", b"", Some(2)), 3);
        assert_eq!(_edit_distance(b"BA", b"AB", Some(1)), 2);
        assert_eq!(_edit_distance(b"AAAAAAAA", b"CCCCCCCC", Some(3)), 4);
    }

    #[test]
    fn wide_band_is_exact() {
        assert_eq!(_edit_distance(b"SISSI", b"MISSISSIPPI", Some(100)), 6);
        assert_eq!(_edit_distance(b"SISSI", b"MISSISSIPPI", Some(6)), 6);
        assert_eq!(_edit_distance(b"SISSI", b"MISSISSIPPI", Some(5)), 6);
    }
}
