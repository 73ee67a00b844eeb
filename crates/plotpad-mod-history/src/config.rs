/// Runtime configuration for the history system.
use plotpad_config::HistorySettings;

/// Configuration for a `ChangeTracker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max undo batches. 0 = unlimited.
    pub max_depth: usize,
    /// Whether `mark_clean` notifies the observer.
    pub notify_on_mark_clean: bool,
}

/// Same limits as a fresh config file.
impl Default for HistoryConfig {
    fn default() -> Self {
        Self::from(&HistorySettings::default())
    }
}

impl HistoryConfig {
    /// No depth limit; every batch is kept until `reset`.
    pub fn unbounded() -> Self {
        Self {
            max_depth: 0,
            ..Self::default()
        }
    }

    pub(crate) fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth != 0 && depth > self.max_depth
    }
}

impl From<&HistorySettings> for HistoryConfig {
    fn from(settings: &HistorySettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            notify_on_mark_clean: settings.notify_on_mark_clean,
        }
    }
}
