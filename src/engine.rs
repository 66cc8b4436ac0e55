//! Event-driven engine facade
//!
//! The host wires two notifications into the engine: lines changed (or
//! newly visible) and caret moved. The engine keeps the character cache
//! current and answers each caret movement with the span to highlight,
//! if any. A third notification, lines hidden, lets hosts drop lines
//! that scrolled out of view.

use crate::cache::{CharCache, LineId, VisibleLine};
use crate::caret::{self, CaretPosition};
use crate::classify::TextSource;
use crate::config::Settings;
use crate::locate;
use crate::matcher::{self, HighlightSpan};

/// Highlight decision for one caret movement
///
/// Each event supersedes the previous one; `Clear` tells the host to
/// remove any highlight it is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightEvent {
    /// Mark the inclusive span
    Highlight(HighlightSpan),
    /// Nothing to mark
    Clear,
}

/// Brace matching engine
///
/// Owns the character cache and the settings it was constructed with.
/// All work happens synchronously inside the host callbacks; the cache
/// is mutated only by [`on_lines_changed`](Self::on_lines_changed) and
/// [`on_lines_hidden`](Self::on_lines_hidden), never by caret handling.
pub struct BraceEngine {
    settings: Settings,
    cache: CharCache,
}

impl BraceEngine {
    /// Create an engine with the given settings
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            cache: CharCache::new(),
        }
    }

    /// The settings this engine was constructed with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read access to the character cache
    pub fn cache(&self) -> &CharCache {
        &self.cache
    }

    /// Host callback: the given lines changed or became visible
    ///
    /// Old entries for the whole batch are dropped before any line is
    /// reclassified, so no line is represented twice mid-update.
    pub fn on_lines_changed<S: TextSource + ?Sized>(&mut self, doc: &S, lines: &[VisibleLine]) {
        let ids: Vec<LineId> = lines.iter().map(|l| l.id).collect();
        self.cache.invalidate(&ids);
        for line in lines {
            self.cache.populate(doc, line, self.settings.exclude_quoted);
        }
        log::debug!(
            "lines changed: {} reclassified, {} cached",
            lines.len(),
            self.cache.line_count()
        );
    }

    /// Host callback: the given lines scrolled out of view
    pub fn on_lines_hidden(&mut self, lines: &[LineId]) {
        self.cache.invalidate(lines);
        log::debug!("lines hidden: {} remain cached", self.cache.line_count());
    }

    /// Host callback: the caret moved
    ///
    /// An empty cache, an unmappable caret, and a caret away from any
    /// delimiter all clear the highlight; none of them is an error.
    pub fn on_caret_moved(&self, caret: &CaretPosition) -> HighlightEvent {
        if self.cache.is_empty() {
            return HighlightEvent::Clear;
        }

        let offset = match caret::resolve(&self.cache, caret) {
            Some(offset) => offset,
            None => return HighlightEvent::Clear,
        };

        let target = match locate::nearest(&self.cache, offset, &self.settings) {
            Some(target) => target,
            None => {
                log::trace!("no delimiter near caret offset {}", offset);
                return HighlightEvent::Clear;
            }
        };

        let span = matcher::resolve(&self.cache, &target);
        log::trace!(
            "highlight [{}, {}] for delimiter at {}",
            span.start,
            span.end,
            target.offset
        );
        HighlightEvent::Highlight(span)
    }
}
