/// Core undo/redo manager with change counting.
///
/// Committed batches live on an undo stack; undone batches move to a redo
/// stack until the next commit discards them. Every transition updates a
/// `ChangeCount` and reports it to the registered observer.
use crate::config::HistoryConfig;
use crate::count::ChangeCount;
use crate::operation::{AffectedRange, EditBatch};
use crate::session::{ChangeObserver, EditSession};

/// Manages undo/redo history for a single document.
///
/// The tracker owns the history but not the document: it replays batches
/// through whichever `EditSession` was bound by the latest commit.
pub struct ChangeTracker<S: EditSession> {
    /// Committed batches, most recent on top.
    undo_stack: Vec<EditBatch<S::Delta>>,
    /// Undone batches, most recently undone on top.
    redo_stack: Vec<EditBatch<S::Delta>>,
    /// Distance from the last clean checkpoint.
    count: ChangeCount,
    /// Session bound by the last commit.
    session: Option<S>,
    observer: Option<Box<dyn ChangeObserver>>,
    config: HistoryConfig,
}

impl<S: EditSession> std::fmt::Debug for ChangeTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeTracker")
            .field("undo_len", &self.undo_stack.len())
            .field("redo_len", &self.redo_stack.len())
            .field("count", &self.count)
            .field("bound", &self.session.is_some())
            .field("observed", &self.observer.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl<S: EditSession> Default for ChangeTracker<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EditSession> ChangeTracker<S> {
    /// Creates an empty, clean tracker with default config.
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            count: ChangeCount::Clean,
            session: None,
            observer: None,
            config,
        }
    }

    /// Registers the sink notified after every transition, replacing any
    /// previous one.
    pub fn set_observer(&mut self, observer: impl ChangeObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// The session bound by the last commit, if any.
    pub fn session(&self) -> Option<&S> {
        self.session.as_ref()
    }

    /// Records a committed batch and binds `session` as the replay target.
    ///
    /// With `merge` set and a batch on the undo stack, the incoming deltas
    /// are appended to that batch instead of opening a new undo step. Any
    /// pending redo history is discarded.
    pub fn commit(&mut self, batch: EditBatch<S::Delta>, session: S, merge: bool) {
        self.session = Some(session);
        let before = self.count;

        let mut batch = batch;
        if merge {
            if let Some(previous) = self.undo_stack.pop() {
                // Re-incremented below when the merged batch is pushed
                self.count = self.count.decrement();
                batch = previous.concat(batch);
            }
        }

        self.undo_stack.push(batch);
        self.redo_stack.clear();

        if self.config.exceeds_depth(self.undo_stack.len()) {
            let excess = self.undo_stack.len() - self.config.max_depth;
            self.undo_stack.drain(..excess);
            tracing::debug!("Discarded {excess} oldest undo batch(es)");
        }

        self.count = self.count.increment();
        if self.count.is_unrecoverable() && !before.is_unrecoverable() {
            tracing::debug!("Edit after undoing past clean state; clean state is unrecoverable");
        }
        tracing::trace!(merge, count = %self.count, "Committed edit batch");
        self.notify();
    }

    /// Undoes the most recent batch.
    ///
    /// Returns the range reported by the session, or `None` when there is
    /// nothing to undo or `quiet` is set.
    pub fn undo(&mut self, quiet: bool) -> Option<AffectedRange> {
        let session = self.session.as_mut()?;
        let batch = self.undo_stack.pop()?;

        let range = session.reverse_apply(&batch, quiet);
        self.redo_stack.push(batch);
        self.count = self.count.decrement();
        tracing::trace!(count = %self.count, "Undo");
        self.notify();
        range
    }

    /// Redoes the most recently undone batch.
    pub fn redo(&mut self, quiet: bool) -> Option<AffectedRange> {
        let session = self.session.as_mut()?;
        let batch = self.redo_stack.pop()?;

        let range = session.forward_apply(&batch, quiet);
        self.undo_stack.push(batch);
        self.count = self.count.increment();
        tracing::trace!(count = %self.count, "Redo");
        self.notify();
        range
    }

    /// Drops all history and returns to a clean state.
    ///
    /// Used when an unrelated document is loaded into the same editor.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.count = ChangeCount::Clean;
        tracing::debug!("History reset");
        self.notify();
    }

    /// Declares the current state clean (saved). History is kept.
    pub fn mark_clean(&mut self) {
        self.count = ChangeCount::Clean;
        tracing::debug!("Marked clean");
        if self.config.notify_on_mark_clean {
            self.notify();
        }
    }

    pub fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Whether the document is at its clean checkpoint.
    pub fn is_clean(&self) -> bool {
        self.count.is_clean()
    }

    pub fn change_count(&self) -> ChangeCount {
        self.count
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_change_count_changed(self.count);
        }
    }
}
