//! Character classification
//!
//! Tags each character of visible text with its absolute position and,
//! when it is one of the catalog characters, its delimiter entry. Also
//! hosts the quote-escape check that decides whether a position falls
//! inside a string literal.

use crate::cache::LineId;
use crate::delimiter::{self, Delimiter};

/// Quote characters that delimit string literals
const QUOTES: [char; 2] = ['\'', '"'];

/// Read access to the full document text
///
/// The quote-escape check scans from the start of the document, not just
/// the visible lines, so classification needs more than the line being
/// populated. The blanket `str` impl walks characters; hosts with an
/// indexed text store can count prefix occurrences directly.
pub trait TextSource {
    /// Number of occurrences of `ch` strictly before char offset `end`
    fn count_before(&self, ch: char, end: usize) -> usize;
}

impl TextSource for str {
    fn count_before(&self, ch: char, end: usize) -> usize {
        self.chars().take(end).filter(|&c| c == ch).count()
    }
}

/// One character of visible text with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedChar {
    /// The literal character
    pub ch: char,
    /// Absolute char offset in the document
    pub offset: usize,
    /// The visible line this character belongs to
    pub line: LineId,
    /// Catalog entry when the character is a delimiter
    pub delimiter: Option<Delimiter>,
}

impl ClassifiedChar {
    /// True when the character carries a delimiter entry
    pub fn is_delimiter(&self) -> bool {
        self.delimiter.is_some()
    }
}

/// True when `offset` falls inside an unterminated quote run
///
/// A position counts as quoted when either quote character occurs an odd
/// number of times before it. Offset 0 is never quoted.
///
/// The count walks the document prefix on every call, so classifying a
/// full line costs O(line length x offset) in the worst case. Hosts that
/// need better should implement [`TextSource::count_before`] over an
/// indexed text store.
pub fn is_in_quotation<S: TextSource + ?Sized>(doc: &S, offset: usize) -> bool {
    offset != 0 && QUOTES.iter().any(|&q| doc.count_before(q, offset) % 2 == 1)
}

/// Classify a single character of a visible line
///
/// The quote check runs for every catalog hit but only affects the
/// outcome when `exclude_quoted` is set; with it off, a quoted delimiter
/// keeps its catalog entry.
pub fn classify<S: TextSource + ?Sized>(
    doc: &S,
    line: LineId,
    offset: usize,
    ch: char,
    exclude_quoted: bool,
) -> ClassifiedChar {
    let delimiter = delimiter::lookup(ch);
    let quoted = delimiter.is_some() && is_in_quotation(doc, offset);
    let delimiter = if exclude_quoted && quoted {
        None
    } else {
        delimiter
    };

    ClassifiedChar {
        ch,
        offset,
        line,
        delimiter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_zero_never_quoted() {
        assert!(!is_in_quotation("'already open", 0));
        assert!(!is_in_quotation("", 0));
    }

    #[test]
    fn test_odd_count_rule() {
        let doc = "a'b(c'd)e";
        // One single-quote before the `(` at offset 3
        assert!(is_in_quotation(doc, 3));
        // Two single-quotes before the `)` at offset 7
        assert!(!is_in_quotation(doc, 7));
    }

    #[test]
    fn test_double_quotes_counted_separately() {
        let doc = "\"a(b\"c";
        // One double-quote before offset 2: the run is open
        assert!(is_in_quotation(doc, 2));
        // Two double-quotes before offset 5: the run is closed
        assert!(!is_in_quotation(doc, 5));
    }

    #[test]
    fn test_classify_plain_and_delimiter() {
        let doc = "x(y";
        let plain = classify(doc, LineId(0), 0, 'x', false);
        assert!(!plain.is_delimiter());
        assert_eq!(plain.ch, 'x');
        assert_eq!(plain.offset, 0);

        let open = classify(doc, LineId(0), 1, '(', false);
        assert!(open.is_delimiter());
        assert!(open.delimiter.unwrap().is_open());
    }

    #[test]
    fn test_quoted_delimiter_kept_by_default() {
        let doc = "a'b(c'd)e";
        // The `(` at offset 3 sits inside an open quote run, but the
        // quote check does not suppress its delimiter status by default
        let ch = classify(doc, LineId(0), 3, '(', false);
        assert!(ch.is_delimiter());
    }

    #[test]
    fn test_quoted_delimiter_dropped_when_excluded() {
        let doc = "a'b(c'd)e";
        let open = classify(doc, LineId(0), 3, '(', true);
        assert!(!open.is_delimiter());

        // The `)` at offset 7 follows a balanced pair of quotes, so it
        // keeps its entry even with the exclusion on
        let close = classify(doc, LineId(0), 7, ')', true);
        assert!(close.is_delimiter());
    }
}
