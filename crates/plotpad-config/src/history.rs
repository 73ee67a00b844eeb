/// Persisted settings for the undo/redo history.
use serde::{Deserialize, Serialize};

/// Undo steps kept per document unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Upper bound for the edit grouping window.
const MAX_GROUP_TIMEOUT_MS: u64 = 10_000;

/// History settings as stored in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Max undo steps kept per document. 0 = unlimited.
    pub max_depth: usize,
    /// Time window in milliseconds for merging consecutive edits
    /// into a single undo step.
    pub group_timeout_ms: u64,
    /// Whether marking a document clean notifies the change observer.
    pub notify_on_mark_clean: bool,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            group_timeout_ms: 500,
            notify_on_mark_clean: true,
        }
    }
}

impl HistorySettings {
    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        self.group_timeout_ms = self.group_timeout_ms.min(MAX_GROUP_TIMEOUT_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HistorySettings::default();
        assert_eq!(settings.max_depth, 10_000);
        assert_eq!(settings.group_timeout_ms, 500);
        assert!(settings.notify_on_mark_clean);
    }

    #[test]
    fn test_sanitize_clamps_group_timeout() {
        let mut settings = HistorySettings {
            group_timeout_ms: 60_000,
            ..Default::default()
        };
        settings.sanitize();
        assert_eq!(settings.group_timeout_ms, 10_000);
    }

    #[test]
    fn test_sanitize_keeps_unlimited_depth() {
        let mut settings = HistorySettings {
            max_depth: 0,
            ..Default::default()
        };
        settings.sanitize();
        assert_eq!(settings.max_depth, 0);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let parsed: HistorySettings = serde_json::from_str(r#"{"max_depth": 42}"#).unwrap();
        assert_eq!(parsed.max_depth, 42);
        assert_eq!(parsed.group_timeout_ms, 500);
        assert!(parsed.notify_on_mark_clean);
    }
}
