//! Caret position resolution
//!
//! Maps a host-reported caret position (line identity plus visual
//! column) to an absolute char offset in the document.

use unicode_width::UnicodeWidthChar;

use crate::cache::{CharCache, LineId};

/// Which side of a visual seam the caret sticks to
///
/// Carried through from the host contract. Line handles cover disjoint
/// `[start, end)` ranges, so both sides of a seam map to the same
/// absolute offset and resolution does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Affinity {
    #[default]
    Backward,
    Forward,
}

/// A host-reported caret position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretPosition {
    /// The visible line the caret is on
    pub line: LineId,
    /// Visual column, in display-width cells from the line start
    pub column: usize,
    /// Seam affinity
    pub affinity: Affinity,
}

impl CaretPosition {
    /// Create a caret position with default affinity
    pub fn new(line: u64, column: usize) -> Self {
        Self {
            line: LineId(line),
            column,
            affinity: Affinity::default(),
        }
    }
}

/// Resolve a caret position to an absolute char offset
///
/// Returns `None` when the caret's line is not cached or the column lies
/// beyond the line's display width. A column falling inside a wide
/// character resolves to the boundary after it. Column equal to the full
/// display width maps to the line's end offset.
pub fn resolve(cache: &CharCache, caret: &CaretPosition) -> Option<usize> {
    let line = cache.line(caret.line)?;

    let mut col = 0;
    for (i, ch) in line.text.chars().enumerate() {
        if col >= caret.column {
            return Some(line.start + i);
        }
        col += ch.width().unwrap_or(1);
    }
    if col >= caret.column {
        Some(line.end)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::VisibleLine;

    fn cache_with(doc: &str, lines: &[VisibleLine]) -> CharCache {
        let mut cache = CharCache::new();
        for line in lines {
            cache.populate(doc, line, false);
        }
        cache
    }

    #[test]
    fn test_resolve_ascii_columns() {
        let doc = "(x)";
        let cache = cache_with(doc, &[VisibleLine::new(0, 0, doc)]);

        assert_eq!(resolve(&cache, &CaretPosition::new(0, 0)), Some(0));
        assert_eq!(resolve(&cache, &CaretPosition::new(0, 1)), Some(1));
        assert_eq!(resolve(&cache, &CaretPosition::new(0, 3)), Some(3));
    }

    #[test]
    fn test_resolve_uses_line_start() {
        let doc = "ab\ncd()";
        let cache = cache_with(
            doc,
            &[VisibleLine::new(0, 0, "ab"), VisibleLine::new(1, 3, "cd()")],
        );

        assert_eq!(resolve(&cache, &CaretPosition::new(1, 0)), Some(3));
        assert_eq!(resolve(&cache, &CaretPosition::new(1, 3)), Some(6));
    }

    #[test]
    fn test_resolve_wide_characters() {
        // Each CJK character occupies two display cells
        let doc = "你好()";
        let cache = cache_with(doc, &[VisibleLine::new(0, 0, doc)]);

        assert_eq!(resolve(&cache, &CaretPosition::new(0, 0)), Some(0));
        assert_eq!(resolve(&cache, &CaretPosition::new(0, 2)), Some(1));
        assert_eq!(resolve(&cache, &CaretPosition::new(0, 4)), Some(2));
        // A column inside a wide character resolves past it
        assert_eq!(resolve(&cache, &CaretPosition::new(0, 1)), Some(1));
    }

    #[test]
    fn test_resolve_unknown_line() {
        let doc = "()";
        let cache = cache_with(doc, &[VisibleLine::new(0, 0, doc)]);
        assert_eq!(resolve(&cache, &CaretPosition::new(9, 0)), None);
    }

    #[test]
    fn test_resolve_column_past_end() {
        let doc = "()";
        let cache = cache_with(doc, &[VisibleLine::new(0, 0, doc)]);
        assert_eq!(resolve(&cache, &CaretPosition::new(0, 3)), None);
    }

    #[test]
    fn test_affinity_does_not_change_result() {
        let doc = "()";
        let cache = cache_with(doc, &[VisibleLine::new(0, 0, doc)]);

        let mut caret = CaretPosition::new(0, 2);
        caret.affinity = Affinity::Forward;
        assert_eq!(resolve(&cache, &caret), Some(2));
        caret.affinity = Affinity::Backward;
        assert_eq!(resolve(&cache, &caret), Some(2));
    }
}
