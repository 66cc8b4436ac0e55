//! Brace matching and highlight-span engine
//!
//! On every caret movement, finds the delimiter pair enclosing or next
//! to the caret among the currently visible lines and reports the
//! inclusive span between the two halves. The host editor feeds visible
//! text and caret positions in; rendering the returned span is the
//! host's job.
//!
//! ```
//! use brace_outlines::{BraceEngine, CaretPosition, HighlightEvent, Settings, VisibleLine};
//!
//! let doc = "(x)";
//! let mut engine = BraceEngine::new(Settings::default());
//! engine.on_lines_changed(doc, &[VisibleLine::new(0, 0, doc)]);
//!
//! match engine.on_caret_moved(&CaretPosition::new(0, 1)) {
//!     HighlightEvent::Highlight(span) => assert_eq!((span.start, span.end), (0, 2)),
//!     HighlightEvent::Clear => unreachable!(),
//! }
//! ```

mod cache;
mod caret;
mod classify;
mod config;
mod delimiter;
mod engine;
mod error;
mod locate;
mod matcher;
mod style;

pub use cache::{CharCache, LineId, VisibleLine};
pub use caret::{Affinity, CaretPosition};
pub use classify::{is_in_quotation, ClassifiedChar, TextSource};
pub use config::Settings;
pub use delimiter::{Delimiter, Family, Role, CATALOG};
pub use engine::{BraceEngine, HighlightEvent};
pub use error::{EngineError, Result};
pub use matcher::HighlightSpan;
pub use style::Color;
