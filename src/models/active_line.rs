//! Active line value
//!
//! The line currently applicable for a playback position, or the placeholder
//! shown before the first line's time has been reached.

use super::lyric::LyricLine;

/// Placeholder text displayed when no lyric line is active yet
pub const PENDING_TEXT: &str = "♪";

/// Result of resolving a playback position against a lyric set
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActiveLine<'a> {
    /// No line has started yet (or no lyrics are loaded)
    Pending,

    /// A line is active
    Current {
        /// Index into the sorted lyric set
        index: usize,
        line: &'a LyricLine,
    },
}

impl<'a> ActiveLine<'a> {
    /// Text to display, with the placeholder for `Pending`
    pub fn text(&self) -> &'a str {
        match *self {
            ActiveLine::Pending => PENDING_TEXT,
            ActiveLine::Current { line, .. } => line.text.as_str(),
        }
    }

    /// Index of the active line in the set, if any
    pub fn index(&self) -> Option<usize> {
        match *self {
            ActiveLine::Pending => None,
            ActiveLine::Current { index, .. } => Some(index),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ActiveLine::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_text_is_placeholder() {
        assert_eq!(ActiveLine::Pending.text(), "♪");
        assert_eq!(ActiveLine::Pending.index(), None);
        assert!(ActiveLine::Pending.is_pending());
    }

    #[test]
    fn test_current_exposes_line() {
        let line = LyricLine::new(2.0, "hello");
        let active = ActiveLine::Current { index: 3, line: &line };
        assert_eq!(active.text(), "hello");
        assert_eq!(active.index(), Some(3));
        assert!(!active.is_pending());
    }
}
