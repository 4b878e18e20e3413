//! Active-line lookup
//!
//! The active line is the line with the greatest `time <= position`. Because a
//! `LyricSet` is always sorted, this is a binary search for the end of the
//! `time <= position` prefix. When several lines share a timestamp, the last one
//! in sorted order wins, the same line a descending linear scan would find first.
//!
//! Lookups run on every playback tick, so they must stay cheap: O(log n), no
//! allocation, no state.

use crate::models::{ActiveLine, LyricSet};

/// Index of the active line for `position`, or `None` before the first line
///
/// A NaN position matches no line.
pub fn resolve_index(set: &LyricSet, position: f64) -> Option<usize> {
    let end = set.lines().partition_point(|line| line.time <= position);
    end.checked_sub(1)
}

/// Resolve the active line for a playback position
pub fn resolve(set: &LyricSet, position: f64) -> ActiveLine<'_> {
    match resolve_index(set, position) {
        Some(index) => ActiveLine::Current {
            index,
            line: &set.lines()[index],
        },
        None => ActiveLine::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LyricLine;

    fn sample_set() -> LyricSet {
        LyricSet::from_lines(vec![
            LyricLine::new(1.0, "one"),
            LyricLine::new(4.0, "four"),
            LyricLine::new(7.5, "seven"),
        ])
    }

    /// Reference descending scan, for cross-checking the binary search
    fn linear_scan(set: &LyricSet, position: f64) -> Option<usize> {
        (0..set.len()).rev().find(|&i| set.lines()[i].time <= position)
    }

    #[test]
    fn test_resolve_empty_set_is_pending() {
        let set = LyricSet::default();
        for t in [0.0, 1.0, 1000.0] {
            assert!(resolve(&set, t).is_pending());
        }
    }

    #[test]
    fn test_resolve_before_first_line_is_pending() {
        let set = sample_set();
        assert!(resolve(&set, 0.0).is_pending());
        assert!(resolve(&set, 0.999).is_pending());
    }

    #[test]
    fn test_resolve_exact_boundaries() {
        let set = sample_set();
        assert_eq!(resolve(&set, 1.0).text(), "one");
        assert_eq!(resolve(&set, 3.999).text(), "one");
        assert_eq!(resolve(&set, 4.0).text(), "four");
        assert_eq!(resolve(&set, 7.5).text(), "seven");
        assert_eq!(resolve(&set, 1e9).text(), "seven");
    }

    #[test]
    fn test_resolve_nan_and_negative_are_pending() {
        let set = sample_set();
        assert!(resolve(&set, f64::NAN).is_pending());
        assert!(resolve(&set, -1.0).is_pending());
    }

    #[test]
    fn test_resolve_tie_prefers_last_of_group() {
        let set = LyricSet::from_lines(vec![
            LyricLine::new(3.0, "first"),
            LyricLine::new(3.0, "second"),
            LyricLine::new(5.0, "later"),
        ]);
        let active = resolve(&set, 3.0);
        assert_eq!(active.text(), "second");
        assert_eq!(active.index(), Some(1));
    }

    #[test]
    fn test_binary_search_matches_linear_scan() {
        let set = LyricSet::from_lines(vec![
            LyricLine::new(0.0, "a"),
            LyricLine::new(0.0, "b"),
            LyricLine::new(2.5, "c"),
            LyricLine::new(2.5, "d"),
            LyricLine::new(2.5, "e"),
            LyricLine::new(8.0, "f"),
        ]);

        let mut t = -1.0;
        while t < 10.0 {
            assert_eq!(resolve_index(&set, t), linear_scan(&set, t), "t = {}", t);
            t += 0.25;
        }
    }
}
