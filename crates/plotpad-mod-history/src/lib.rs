/// Change-tracking undo/redo history.
///
/// Provides a `ChangeTracker` that keeps committed edit batches on undo and
/// redo stacks, replays them through a bound `EditSession`, and reports a
/// `ChangeCount` to a `ChangeObserver` after every transition so the host
/// can tell whether the document has unsaved changes.
pub mod config;
pub mod count;
pub mod manager;
pub mod operation;
pub mod session;

pub use config::HistoryConfig;
pub use count::ChangeCount;
pub use manager::ChangeTracker;
pub use operation::{AffectedRange, EditBatch};
pub use session::{ChangeObserver, EditSession};
