//! Nearest-delimiter search
//!
//! The caret at offset `c` sits between the characters at `c - 1` and
//! `c`. The character to its left wins over the character to its right;
//! with `match_only_if_caret_on_brace` off, a miss falls back to the
//! first open delimiter earlier in the document.

use crate::cache::CharCache;
use crate::classify::ClassifiedChar;
use crate::config::Settings;
use crate::delimiter::Role;

/// Find the delimiter the caret is on or next to
///
/// Probes for an exact hit at `caret_offset - 1`, then at `caret_offset`.
/// When `match_only_if_caret_on_brace` is set those probes are the whole
/// search; otherwise a miss falls back to the lowest-offset open
/// delimiter strictly before `caret_offset - 1` (document order, not
/// nearest-enclosing).
pub fn nearest(
    cache: &CharCache,
    caret_offset: usize,
    settings: &Settings,
) -> Option<ClassifiedChar> {
    let delimiters = cache.all_delimiters();
    let left = caret_offset.checked_sub(1);

    let hit = left
        .and_then(|p| delimiters.iter().find(|c| c.offset == p))
        .or_else(|| delimiters.iter().find(|c| c.offset == caret_offset))
        .copied();

    if settings.match_only_if_caret_on_brace || hit.is_some() {
        return hit;
    }

    let p = left?;
    delimiters
        .iter()
        .find(|c| matches!(c.delimiter, Some(d) if d.role == Role::Open) && c.offset < p)
        .copied()
}
