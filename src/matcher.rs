//! Match resolution and highlight spans
//!
//! Pairs a delimiter with its counterpart by mirroring its index in the
//! cached delimiter sequence and produces the inclusive span between
//! the two halves.

use std::ops::Range;

use crate::cache::CharCache;
use crate::classify::ClassifiedChar;
use crate::delimiter::Role;

/// Inclusive range of absolute offsets to mark
///
/// Both endpoint characters are part of the highlight. Produced per
/// caret-movement event and superseded by the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// First highlighted offset
    pub start: usize,
    /// Last highlighted offset (inclusive)
    pub end: usize,
}

impl HighlightSpan {
    /// Create a span, reordering so `start <= end`
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Number of characters covered, endpoints included
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// True when `offset` lies inside the span, endpoints included
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    /// The equivalent half-open range
    ///
    /// `end` is inside the highlight, so the half-open form extends one
    /// past it.
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end + 1
    }
}

/// Resolve the counterpart of `target` and compute the span to mark
///
/// The counterpart is the element mirrored from the opposite end of the
/// cached delimiter sequence. Mirrored pairing is only nesting-correct
/// when the visible delimiters form a single well-nested, fully balanced
/// run; it is not a stack matcher.
///
/// # Panics
///
/// Panics when `target` is not present in the cached delimiter sequence.
/// The locator only hands out members of that sequence, so a miss means
/// the cache changed underneath the caller.
pub fn resolve(cache: &CharCache, target: &ClassifiedChar) -> HighlightSpan {
    let delimiters = cache.all_delimiters();
    let index = delimiters
        .iter()
        .position(|c| c.offset == target.offset)
        .unwrap_or_else(|| {
            panic!(
                "delimiter at offset {} is not in the cache it was drawn from",
                target.offset
            )
        });

    let counterpart = delimiters[delimiters.len() - 1 - index];

    if matches!(target.delimiter, Some(d) if d.role == Role::Open) {
        HighlightSpan::new(target.offset, counterpart.offset)
    } else {
        HighlightSpan::new(counterpart.offset, target.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::VisibleLine;

    fn cache_for(doc: &str) -> CharCache {
        let mut cache = CharCache::new();
        cache.populate(doc, &VisibleLine::new(0, 0, doc), false);
        cache
    }

    fn delimiter_at(cache: &CharCache, offset: usize) -> ClassifiedChar {
        cache
            .all_delimiters()
            .into_iter()
            .find(|c| c.offset == offset)
            .unwrap()
    }

    #[test]
    fn test_single_pair() {
        let cache = cache_for("(x)");
        let span = resolve(&cache, &delimiter_at(&cache, 0));
        assert_eq!(span, HighlightSpan { start: 0, end: 2 });
    }

    #[test]
    fn test_mirrored_pairing_nested() {
        // Delimiters at offsets 0, 2, 4, 6; index 0 mirrors to index 3
        let cache = cache_for("{a{b}c}");
        let span = resolve(&cache, &delimiter_at(&cache, 0));
        assert_eq!(span, HighlightSpan { start: 0, end: 6 });

        // The inner close at offset 4 (index 2) mirrors to index 1
        let span = resolve(&cache, &delimiter_at(&cache, 4));
        assert_eq!(span, HighlightSpan { start: 2, end: 4 });
    }

    #[test]
    fn test_close_delimiter_orients_span() {
        let cache = cache_for("[y]");
        let span = resolve(&cache, &delimiter_at(&cache, 2));
        assert_eq!(span, HighlightSpan { start: 0, end: 2 });
    }

    #[test]
    fn test_span_reorders_endpoints() {
        let span = HighlightSpan::new(9, 4);
        assert_eq!(span.start, 4);
        assert_eq!(span.end, 9);
    }

    #[test]
    fn test_span_len_and_contains() {
        let span = HighlightSpan::new(0, 2);
        assert_eq!(span.len(), 3);
        assert!(span.contains(0));
        assert!(span.contains(2));
        assert!(!span.contains(3));
    }

    #[test]
    fn test_to_range_extends_past_inclusive_end() {
        let span = HighlightSpan::new(0, 2);
        assert_eq!(span.to_range(), 0..3);
    }

    #[test]
    #[should_panic(expected = "not in the cache")]
    fn test_foreign_delimiter_panics() {
        let cache = cache_for("(x)");
        let mut foreign = delimiter_at(&cache, 0);
        foreign.offset = 99;
        resolve(&cache, &foreign);
    }
}
