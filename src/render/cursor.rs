//! Batch cursor over the record store.

use std::ops::Range;

/// A contiguous slice of the record store drawn on one tick.
pub type Batch = Range<usize>;

/// Walks `[0, total)` in batches of at most `batch_size`.
///
/// The final batch shrinks to the remaining count; an exhausted cursor yields
/// `None` and never an empty batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCursor {
    position: usize,
    total: usize,
    batch_size: usize,
}

impl RenderCursor {
    /// Create a cursor over `total` records. A `batch_size` of zero is treated as one.
    #[must_use]
    pub fn new(total: usize, batch_size: usize) -> Self {
        Self { position: 0, total, batch_size: batch_size.max(1) }
    }

    /// Records drawn so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Records left to draw.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.total - self.position
    }

    /// Whether every record has been handed out.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.position >= self.total
    }
}

impl Iterator for RenderCursor {
    type Item = Batch;

    fn next(&mut self) -> Option<Batch> {
        if self.is_finished() {
            return None;
        }
        let len = self.batch_size.min(self.remaining());
        let batch = self.position..self.position + len;
        self.position += len;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining().div_ceil(self.batch_size);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RenderCursor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batches_with_remainder() {
        let batches: Vec<_> = RenderCursor::new(2500, 1000).collect();
        assert_eq!(batches, vec![0..1000, 1000..2000, 2000..2500]);
    }

    #[test]
    fn test_batches_evenly_divisible() {
        let batches: Vec<_> = RenderCursor::new(3000, 1000).collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches.last(), Some(&(2000..3000)));
    }

    #[test]
    fn test_empty_store_yields_nothing() {
        let mut cursor = RenderCursor::new(0, 1000);
        assert!(cursor.is_finished());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_fewer_records_than_batch() {
        let batches: Vec<_> = RenderCursor::new(7, 1000).collect();
        assert_eq!(batches, vec![0..7]);
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        assert_eq!(RenderCursor::new(3, 0).count(), 3);
    }

    #[test]
    fn test_size_hint_matches_batches() {
        let cursor = RenderCursor::new(2001, 1000);
        assert_eq!(cursor.len(), 3);
    }
}
