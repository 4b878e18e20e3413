//! Lyric line and lyric set models
//!
//! A `LyricSet` is the sorted, validated collection of timestamped lines for one
//! loaded session. It is never edited in place: loading a new document builds a
//! whole new set and swaps it in.

use serde::{Deserialize, Serialize};

/// A single timestamped caption entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LyricLine {
    /// Start time in seconds (non-negative)
    pub time: f64,

    /// Text shown while this line is active (may be empty)
    pub text: String,
}

impl LyricLine {
    /// Create a new lyric line
    pub fn new(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }
}

/// Time-ordered collection of lyric lines
///
/// Lines are sorted ascending by `time` with a stable sort, so lines sharing a
/// timestamp keep their input order. The empty set is the "no lyrics loaded" state.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct LyricSet {
    lines: Vec<LyricLine>,
}

impl LyricSet {
    /// Build a set from lines in any order
    ///
    /// Always sorts, even if the input already looks ordered. Lines whose time
    /// is negative, NaN or infinite are dropped with a warning.
    pub fn from_lines(mut lines: Vec<LyricLine>) -> Self {
        let before = lines.len();
        lines.retain(|line| line.time.is_finite() && line.time >= 0.0);
        if lines.len() != before {
            log::warn!(
                "Dropped {} lyric lines with negative or non-finite time",
                before - lines.len()
            );
        }

        // slice::sort_by is stable; ties keep input order
        lines.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { lines }
    }

    /// All lines in ascending time order
    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LyricLine> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LyricLine> {
        self.lines.iter()
    }

    /// Serialize back to the lyric document format (a JSON array)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a LyricSet {
    type Item = &'a LyricLine;
    type IntoIter = std::slice::Iter<'a, LyricLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_sorts_ascending() {
        let set = LyricSet::from_lines(vec![
            LyricLine::new(5.0, "B"),
            LyricLine::new(2.0, "A"),
            LyricLine::new(9.5, "C"),
        ]);

        let times: Vec<f64> = set.iter().map(|l| l.time).collect();
        assert_eq!(times, vec![2.0, 5.0, 9.5]);
    }

    #[test]
    fn test_from_lines_is_stable_for_equal_times() {
        let set = LyricSet::from_lines(vec![
            LyricLine::new(3.0, "first"),
            LyricLine::new(1.0, "zero"),
            LyricLine::new(3.0, "second"),
            LyricLine::new(3.0, "third"),
        ]);

        let texts: Vec<&str> = set.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["zero", "first", "second", "third"]);
    }

    #[test]
    fn test_default_is_empty() {
        let set = LyricSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.get(0).is_none());
    }

    #[test]
    fn test_from_lines_drops_unusable_times() {
        let set = LyricSet::from_lines(vec![
            LyricLine::new(2.0, "b"),
            LyricLine::new(-f64::NAN, "negative nan"),
            LyricLine::new(f64::NAN, "nan"),
            LyricLine::new(-1.0, "negative"),
            LyricLine::new(f64::INFINITY, "inf"),
            LyricLine::new(0.0, "a"),
        ]);

        let texts: Vec<&str> = set.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(crate::sync::resolve_index(&set, 1.0), Some(0));
    }

    #[test]
    fn test_to_json_is_plain_array() {
        let set = LyricSet::from_lines(vec![LyricLine::new(1.5, "hi")]);
        assert_eq!(set.to_json().unwrap(), r#"[{"time":1.5,"text":"hi"}]"#);
    }
}
