//! Character cache for visible lines
//!
//! Holds the classified characters of every line the host currently has
//! on screen, keyed by line identity. Entries are dropped and rebuilt
//! per line whenever the host reports that line as changed, and dropped
//! outright when a line scrolls out of view.

use std::collections::HashMap;

use crate::classify::{self, ClassifiedChar, TextSource};

/// Identity of a visible line, assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

/// A visible line as reported by the host
///
/// `start` and `end` are absolute char offsets; `text` holds exactly
/// `end - start` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleLine {
    /// Host-assigned identity
    pub id: LineId,
    /// Absolute char offset of the first character (inclusive)
    pub start: usize,
    /// Absolute char offset one past the last character (exclusive)
    pub end: usize,
    /// The line's text
    pub text: String,
}

impl VisibleLine {
    /// Create a line handle, deriving `end` from the text length
    pub fn new(id: u64, start: usize, text: &str) -> Self {
        Self {
            id: LineId(id),
            start,
            end: start + text.chars().count(),
            text: text.to_string(),
        }
    }

    /// Number of characters in the line
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a line with no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Cached classification for one line
#[derive(Debug, Clone)]
struct CachedLine {
    line: VisibleLine,
    chars: Vec<ClassifiedChar>,
}

/// Classified characters for the currently visible lines
#[derive(Debug, Default)]
pub struct CharCache {
    lines: HashMap<LineId, CachedLine>,
}

impl CharCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            lines: HashMap::new(),
        }
    }

    /// True when no line is cached
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of cached lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Drop cached characters for the given lines
    pub fn invalidate(&mut self, ids: &[LineId]) {
        for id in ids {
            self.lines.remove(id);
        }
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Classify every character of `line` from its start offset to its
    /// end offset and store the result, replacing any previous entry for
    /// the same id
    pub fn populate<S: TextSource + ?Sized>(
        &mut self,
        doc: &S,
        line: &VisibleLine,
        exclude_quoted: bool,
    ) {
        debug_assert_eq!(line.text.chars().count(), line.len());

        let chars: Vec<ClassifiedChar> = line
            .text
            .chars()
            .enumerate()
            .map(|(i, ch)| classify::classify(doc, line.id, line.start + i, ch, exclude_quoted))
            .collect();

        log::trace!(
            "cached line {:?}: {} chars, {} delimiters",
            line.id,
            chars.len(),
            chars.iter().filter(|c| c.is_delimiter()).count()
        );

        self.lines.insert(
            line.id,
            CachedLine {
                line: line.clone(),
                chars,
            },
        );
    }

    /// The geometry of a cached line
    pub fn line(&self, id: LineId) -> Option<&VisibleLine> {
        self.lines.get(&id).map(|c| &c.line)
    }

    /// Classified characters of a cached line, in ascending offset order
    pub fn line_chars(&self, id: LineId) -> Option<&[ClassifiedChar]> {
        self.lines.get(&id).map(|c| c.chars.as_slice())
    }

    /// Every cached delimiter, ordered by ascending absolute offset
    /// across all lines combined
    pub fn all_delimiters(&self) -> Vec<ClassifiedChar> {
        let mut delimiters: Vec<ClassifiedChar> = self
            .lines
            .values()
            .flat_map(|c| c.chars.iter().copied())
            .filter(|c| c.is_delimiter())
            .collect();
        delimiters.sort_by_key(|c| c.offset);
        delimiters
    }
}
