//! Text editing host for the change-tracking history.
//!
//! A rope-backed [`TextDocument`] is shared with the history through
//! [`SharedDocument`], which replays committed [`TextDelta`] batches. The
//! [`Editor`] ties a document to a `ChangeTracker`, decides when edits merge
//! into one undo step, and reports the modified state via
//! [`ModifiedIndicator`].
pub mod buffer;
pub mod delta;
pub mod document;
pub mod editor;
pub mod indicator;

pub use buffer::TextBuffer;
pub use delta::TextDelta;
pub use document::{SharedDocument, TextDocument};
pub use editor::Editor;
pub use indicator::ModifiedIndicator;
