/// Core types for committed edit batches.
use serde::{Deserialize, Serialize};

/// Char range touched by an undo or redo replay, in the session's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AffectedRange {
    pub start: usize,
    pub end: usize,
}

impl AffectedRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One atomic undo/redo unit: deltas in the order they were applied.
///
/// The history never looks inside a delta; it only stores, concatenates
/// and hands batches back to the session for replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBatch<D> {
    deltas: Vec<D>,
}

impl<D> EditBatch<D> {
    pub fn new(deltas: Vec<D>) -> Self {
        Self { deltas }
    }

    /// Deltas in chronological order.
    pub fn deltas(&self) -> &[D] {
        &self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Appends `later` after this batch's deltas.
    #[must_use]
    pub fn concat(mut self, later: EditBatch<D>) -> Self {
        self.deltas.extend(later.deltas);
        self
    }

    pub fn into_deltas(self) -> Vec<D> {
        self.deltas
    }
}

impl<D> From<Vec<D>> for EditBatch<D> {
    fn from(deltas: Vec<D>) -> Self {
        Self::new(deltas)
    }
}

impl<D> FromIterator<D> for EditBatch<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
