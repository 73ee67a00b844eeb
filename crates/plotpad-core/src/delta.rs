/// Text deltas recorded by the document and replayed by the history.
use plotpad_mod_history::AffectedRange;

/// A single span edit in char offsets.
///
/// `Remove` carries the removed text so the delta can be inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextDelta {
    Insert { position: usize, text: String },
    Remove { position: usize, text: String },
}

impl TextDelta {
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self::Insert {
            position,
            text: text.into(),
        }
    }

    pub fn remove(position: usize, text: impl Into<String>) -> Self {
        Self::Remove {
            position,
            text: text.into(),
        }
    }

    /// The delta that undoes this one.
    #[must_use]
    pub fn inverted(&self) -> Self {
        match self {
            Self::Insert { position, text } => Self::remove(*position, text.clone()),
            Self::Remove { position, text } => Self::insert(*position, text.clone()),
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::Insert { position, .. } | Self::Remove { position, .. } => *position,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Insert { text, .. } | Self::Remove { text, .. } => text,
        }
    }

    /// Length of the delta's text in chars.
    pub fn len_chars(&self) -> usize {
        self.text().chars().count()
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert { .. })
    }

    /// Range occupied by the delta's text in the document after it is applied.
    pub fn applied_range(&self) -> AffectedRange {
        let position = self.position();
        match self {
            Self::Insert { .. } => AffectedRange::new(position, position + self.len_chars()),
            Self::Remove { .. } => AffectedRange::new(position, position),
        }
    }
}
