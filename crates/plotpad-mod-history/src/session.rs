/// Collaborator interfaces the history drives: the edit session it replays
/// batches through and the observer it reports change counts to.
use crate::count::ChangeCount;
use crate::operation::{AffectedRange, EditBatch};

/// The document a `ChangeTracker` replays batches against.
///
/// When `quiet` is set the session applies the batch without any visible
/// selection or scroll side effect and returns `None`.
pub trait EditSession {
    /// Opaque delta record produced by this session.
    type Delta;

    /// Reverts `batch`, latest delta first.
    fn reverse_apply(
        &mut self,
        batch: &EditBatch<Self::Delta>,
        quiet: bool,
    ) -> Option<AffectedRange>;

    /// Re-applies `batch` in its original order.
    fn forward_apply(
        &mut self,
        batch: &EditBatch<Self::Delta>,
        quiet: bool,
    ) -> Option<AffectedRange>;
}

/// Synchronous sink for change count updates.
///
/// Called in-line after every mutating history operation. Implementations
/// must not call back into the tracker that notified them.
pub trait ChangeObserver {
    fn on_change_count_changed(&mut self, count: ChangeCount);
}

impl<F> ChangeObserver for F
where
    F: FnMut(ChangeCount),
{
    fn on_change_count_changed(&mut self, count: ChangeCount) {
        self(count);
    }
}
