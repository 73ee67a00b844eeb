/// Distance of a document from its last clean (saved) state.
use std::fmt;
use std::num::NonZeroU64;

/// Net edit count since the last clean checkpoint.
///
/// A step below zero means the user undid past the clean state. That
/// collapses to `Unrecoverable`, which absorbs every further step: only
/// [`ChangeTracker::mark_clean`](crate::ChangeTracker::mark_clean) or
/// [`ChangeTracker::reset`](crate::ChangeTracker::reset) leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChangeCount {
    /// At the clean checkpoint.
    #[default]
    Clean,
    /// `n` net edits applied since the clean checkpoint.
    Dirty(NonZeroU64),
    /// The clean checkpoint can no longer be reached through undo/redo.
    Unrecoverable,
}

impl ChangeCount {
    /// One step away from clean (a commit or redo).
    #[must_use]
    pub fn increment(self) -> Self {
        match self {
            Self::Clean => Self::Dirty(NonZeroU64::MIN),
            Self::Dirty(n) => n.checked_add(1).map_or(Self::Unrecoverable, Self::Dirty),
            Self::Unrecoverable => Self::Unrecoverable,
        }
    }

    /// One step back toward clean (an undo).
    ///
    /// Stepping below `Clean` is not reversible: a later `increment` (redo)
    /// stays `Unrecoverable` and never reads clean again, even when it
    /// restores the saved text.
    #[must_use]
    pub fn decrement(self) -> Self {
        match self {
            Self::Clean | Self::Unrecoverable => Self::Unrecoverable,
            Self::Dirty(n) => NonZeroU64::new(n.get() - 1).map_or(Self::Clean, Self::Dirty),
        }
    }

    /// True only for `Clean`.
    pub fn is_clean(self) -> bool {
        self == Self::Clean
    }

    pub fn is_unrecoverable(self) -> bool {
        self == Self::Unrecoverable
    }

    /// Numeric value, or `None` when unrecoverable.
    pub fn value(self) -> Option<u64> {
        match self {
            Self::Clean => Some(0),
            Self::Dirty(n) => Some(n.get()),
            Self::Unrecoverable => None,
        }
    }
}

impl fmt::Display for ChangeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => write!(f, "0"),
            Self::Dirty(n) => write!(f, "{n}"),
            Self::Unrecoverable => write!(f, "unrecoverable"),
        }
    }
}
