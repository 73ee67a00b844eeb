//! Editor host tying a document to its change-tracking history.
//!
//! Every insert or remove becomes a one-delta batch committed to the
//! `ChangeTracker`. Consecutive edits of the same kind that touch adjacent
//! text within the grouping timeout merge into a single undo step. Saving
//! marks the history clean; loading another file resets it.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use plotpad_config::HistorySettings;
use plotpad_mod_history::{AffectedRange, ChangeCount, ChangeTracker, EditBatch, HistoryConfig};

use crate::delta::TextDelta;
use crate::document::{SharedDocument, TextDocument};
use crate::indicator::ModifiedIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditKind {
    Insert,
    Remove,
}

/// Shape of the last committed edit, used to decide merging.
#[derive(Debug, Clone, Copy)]
struct LastEdit {
    kind: EditKind,
    start: usize,
    end: usize,
    at: Instant,
}

impl LastEdit {
    /// Whether `next` continues this edit: typing on at the end of an
    /// insert, or backspace/delete at the same spot as a removal.
    fn continues_with(&self, next: &LastEdit, timeout: Duration) -> bool {
        if self.kind != next.kind || next.at.duration_since(self.at) >= timeout {
            return false;
        }
        match self.kind {
            EditKind::Insert => next.start == self.end,
            EditKind::Remove => next.end == self.start || next.start == self.start,
        }
    }
}

/// A document with undo/redo history and save tracking.
#[derive(Debug)]
pub struct Editor {
    document: SharedDocument,
    history: ChangeTracker<SharedDocument>,
    indicator: ModifiedIndicator,
    group_timeout: Duration,
    last_edit: Option<LastEdit>,
    file_path: Option<PathBuf>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&HistorySettings::default())
    }
}

impl Editor {
    /// Creates an editor with an empty, unsaved document.
    pub fn new(settings: &HistorySettings) -> Self {
        let indicator = ModifiedIndicator::new();
        let mut history = ChangeTracker::with_config(HistoryConfig::from(settings));
        history.set_observer(indicator.clone());
        Self {
            document: SharedDocument::default(),
            history,
            indicator,
            group_timeout: Duration::from_millis(settings.group_timeout_ms),
            last_edit: None,
            file_path: None,
        }
    }

    /// Creates an editor pre-filled with `text`. The text is the clean state.
    pub fn with_text(text: &str, settings: &HistorySettings) -> Self {
        let editor = Self::new(settings);
        editor.document.replace(TextDocument::from(text));
        editor
    }

    /// Inserts `text` at char `position` and records it in the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of bounds.
    pub fn insert(&mut self, position: usize, text: &str) -> Result<AffectedRange> {
        if text.is_empty() {
            return Ok(AffectedRange::new(position, position));
        }
        let delta = TextDelta::insert(position, text);
        let range = self.document.apply(&delta).context("Failed to insert text")?;
        let edit = LastEdit {
            kind: EditKind::Insert,
            start: range.start,
            end: range.end,
            at: Instant::now(),
        };
        self.commit(delta, edit);
        Ok(range)
    }

    /// Removes the char range [start..end) and records it in the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid or out of bounds.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<AffectedRange> {
        let removed = self.document.slice(start, end)?;
        if removed.is_empty() {
            return Ok(AffectedRange::new(start, start));
        }
        let delta = TextDelta::remove(start, removed);
        let range = self.document.apply(&delta).context("Failed to remove text")?;
        let edit = LastEdit {
            kind: EditKind::Remove,
            start,
            end,
            at: Instant::now(),
        };
        self.commit(delta, edit);
        Ok(range)
    }

    /// Forces the next edit to start a new undo step.
    pub fn break_group(&mut self) {
        self.last_edit = None;
    }

    /// Undoes the last undo step. Returns the range to select, if any.
    pub fn undo(&mut self) -> Option<AffectedRange> {
        self.last_edit = None;
        self.history.undo(false)
    }

    /// Redoes the last undone step. Returns the range to select, if any.
    pub fn redo(&mut self) -> Option<AffectedRange> {
        self.last_edit = None;
        self.history.redo(false)
    }

    /// Declares the current text saved without writing it anywhere.
    pub fn mark_clean(&mut self) {
        self.last_edit = None;
        self.history.mark_clean();
    }

    /// Saves to the current file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no path or the write fails.
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .file_path
            .clone()
            .context("document has no file path")?;
        self.save_to(&path)
    }

    /// Writes the text to `path`, remembers the path and marks the history clean.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, self.document.text())
            .with_context(|| format!("failed to write file: {}", path.display()))?;
        self.file_path = Some(path.to_path_buf());
        self.mark_clean();
        tracing::info!("Saved {}", path.display());
        Ok(())
    }

    /// Replaces the document with `text` and drops all history.
    pub fn load(&mut self, text: &str) {
        self.document.replace(TextDocument::from(text));
        self.reset_history();
    }

    /// Drops all history but keeps the text, which becomes the clean state.
    pub fn reset_history(&mut self) {
        self.last_edit = None;
        self.history.reset();
    }

    /// Loads a file from disk, replacing the document and its history.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?;
        self.load(&text);
        self.file_path = Some(path.to_path_buf());
        tracing::info!("Opened {}", path.display());
        Ok(())
    }

    pub fn text(&self) -> String {
        self.document.text()
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn history(&self) -> &ChangeTracker<SharedDocument> {
        &self.history
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Whether the text differs from the last saved state.
    ///
    /// Read from the history, not the indicator, which misses silent
    /// `mark_clean` calls when `notify_on_mark_clean` is off.
    pub fn is_modified(&self) -> bool {
        !self.history.is_clean()
    }

    pub fn indicator(&self) -> &ModifiedIndicator {
        &self.indicator
    }

    pub fn change_count(&self) -> ChangeCount {
        self.history.change_count()
    }

    pub fn can_undo(&self) -> bool {
        self.history.has_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.has_redo()
    }

    fn commit(&mut self, delta: TextDelta, edit: LastEdit) {
        let merge = self
            .last_edit
            .is_some_and(|last| last.continues_with(&edit, self.group_timeout));
        self.history
            .commit(EditBatch::new(vec![delta]), self.document.clone(), merge);
        self.last_edit = Some(edit);
    }
}
