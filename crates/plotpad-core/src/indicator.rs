/// "Document modified" sink driven by history change counts.
use std::cell::Cell;
use std::rc::Rc;

use plotpad_mod_history::{ChangeCount, ChangeObserver};

#[derive(Debug, Clone, Copy, Default)]
struct IndicatorState {
    last: ChangeCount,
    notifications: usize,
}

/// Tracks the latest change count reported by a `ChangeTracker`.
///
/// Clones share state, so the host keeps one clone to read while the
/// tracker owns another as its observer.
#[derive(Debug, Clone, Default)]
pub struct ModifiedIndicator {
    state: Rc<Cell<IndicatorState>>,
}

impl ModifiedIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the document differs from its saved state.
    pub fn is_modified(&self) -> bool {
        !self.state.get().last.is_clean()
    }

    pub fn last_count(&self) -> ChangeCount {
        self.state.get().last
    }

    /// Number of notifications received so far.
    pub fn notifications(&self) -> usize {
        self.state.get().notifications
    }
}

impl ChangeObserver for ModifiedIndicator {
    fn on_change_count_changed(&mut self, count: ChangeCount) {
        let previous = self.state.get();
        if previous.last.is_clean() != count.is_clean() {
            tracing::debug!(count = %count, modified = !count.is_clean(), "Modified state changed");
        }
        self.state.set(IndicatorState {
            last: count,
            notifications: previous.notifications + 1,
        });
    }
}
