//! Line-number gutter state.

use std::ops::RangeInclusive;

/// Number of gutter rows needed for `text`.
///
/// Always at least 1: empty text still shows line `1`.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Gutter labels for the editor, rebuilt from scratch on every sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineNumbers {
    count: usize,
}

impl LineNumbers {
    /// Recompute the gutter for the given text, overwriting any previous state.
    pub fn sync(&mut self, text: &str) {
        self.count = line_count(text);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Sequential labels `1..=count`, one per visual row.
    pub fn labels(&self) -> RangeInclusive<usize> {
        1..=self.count()
    }
}

impl Default for LineNumbers {
    fn default() -> Self {
        Self { count: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("single"), 1);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count("trailing\n"), 2);
        assert_eq!(line_count("\n\n\n"), 4);
    }

    #[test]
    fn test_labels_for_three_lines() {
        let mut lines = LineNumbers::default();
        lines.sync("a\nb\nc");
        assert_eq!(lines.labels().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_text_renders_one_label() {
        let mut lines = LineNumbers::default();
        lines.sync("x\ny");
        lines.sync("");
        assert_eq!(lines.labels().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut lines = LineNumbers::default();
        lines.sync("one\ntwo");
        let first = lines;
        lines.sync("one\ntwo");
        assert_eq!(lines, first);
        assert_eq!(lines.count(), 2);
    }
}
