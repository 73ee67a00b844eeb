//! Document model and the edit session the history replays through.
//!
//! A `TextDocument` owns the text. The history keeps a `SharedDocument`
//! handle to it so undo/redo can reach the same document the editor edits.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use anyhow::{Context, Result};
use plotpad_mod_history::{AffectedRange, EditBatch, EditSession};

use crate::buffer::TextBuffer;
use crate::delta::TextDelta;

/// Text content plus a version counter bumped on every applied delta.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    buffer: TextBuffer,
    version: u64,
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from(text),
            version: 0,
        }
    }
}

impl TextDocument {
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Content version; changes whenever the text changes.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies one delta and returns the range it now occupies.
    ///
    /// # Errors
    ///
    /// Returns an error if the delta is out of bounds, or if a removal's
    /// recorded text does not match the document.
    pub fn apply(&mut self, delta: &TextDelta) -> Result<AffectedRange> {
        match delta {
            TextDelta::Insert { position, text } => {
                self.buffer.insert(*position, text)?;
            }
            TextDelta::Remove { position, text } => {
                let end = position + delta.len_chars();
                let current = self.buffer.slice(*position, end)?;
                if current != text.as_str() {
                    anyhow::bail!(
                        "removal at {position} expected {text:?} but found {:?}",
                        current.to_string()
                    );
                }
                self.buffer.remove(*position, end)?;
            }
        }
        self.version = self.version.wrapping_add(1);
        Ok(delta.applied_range())
    }

    /// Applies deltas in order, returning the range covering all of them.
    ///
    /// Failing deltas are logged and skipped.
    fn replay<'a>(
        &mut self,
        deltas: impl Iterator<Item = &'a TextDelta>,
    ) -> Option<AffectedRange> {
        let mut touched: Option<AffectedRange> = None;
        for delta in deltas {
            match self.apply(delta) {
                Ok(range) => touched = Some(touched.map_or(range, |t| t.union(range))),
                Err(e) => tracing::warn!("Skipping history delta: {e}"),
            }
        }
        let len = self.buffer.len_chars();
        touched.map(|t| AffectedRange::new(t.start.min(len), t.end.min(len)))
    }
}

/// Cloneable handle to a document, bound to the history as its edit session.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument(Rc<RefCell<TextDocument>>);

impl SharedDocument {
    pub fn new(document: TextDocument) -> Self {
        Self(Rc::new(RefCell::new(document)))
    }

    pub fn borrow(&self) -> Ref<'_, TextDocument> {
        self.0.borrow()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text()
    }

    /// Returns the text in [start..end).
    ///
    /// # Errors
    ///
    /// Returns an error if the range is out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> Result<String> {
        let document = self.0.borrow();
        let slice = document
            .buffer()
            .slice(start, end)
            .context("Failed to read document range")?;
        Ok(slice.to_string())
    }

    /// Applies a live edit (not a replay).
    ///
    /// # Errors
    ///
    /// Returns an error if the delta cannot be applied.
    pub fn apply(&self, delta: &TextDelta) -> Result<AffectedRange> {
        self.0.borrow_mut().apply(delta)
    }

    /// Replaces the whole document.
    pub fn replace(&self, document: TextDocument) {
        *self.0.borrow_mut() = document;
    }

    /// Whether both handles point at the same document.
    pub fn same_document(&self, other: &SharedDocument) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl EditSession for SharedDocument {
    type Delta = TextDelta;

    fn reverse_apply(
        &mut self,
        batch: &EditBatch<TextDelta>,
        quiet: bool,
    ) -> Option<AffectedRange> {
        let inverted: Vec<TextDelta> = batch
            .deltas()
            .iter()
            .rev()
            .map(TextDelta::inverted)
            .collect();
        let range = self.0.borrow_mut().replay(inverted.iter());
        range.filter(|_| !quiet)
    }

    fn forward_apply(
        &mut self,
        batch: &EditBatch<TextDelta>,
        quiet: bool,
    ) -> Option<AffectedRange> {
        let range = self.0.borrow_mut().replay(batch.deltas().iter());
        range.filter(|_| !quiet)
    }
}
