//! Row chunking for the pair space.
//!
//! The upper-triangular `i <= j` pair space is partitioned along the outer
//! `i` axis into fixed-size row ranges, dispatched one at a time. Only the
//! outer dimension is bounded; each row still pairs against the full tail
//! `j in i..n`, so per-chunk work grows with the sequence length.

use std::ops::Range;

pub const DEFAULT_CHUNK_ROWS: usize = 10_000;
pub const MIN_CHUNK_ROWS: usize = 1_000;

/// Lazy iterator over `[start, end)` row ranges covering `0..total`,
/// in increasing order, exhaustive and non-overlapping.
#[derive(Debug, Clone)]
pub struct RowChunks {
    total: usize,
    rows: usize,
    next: usize,
}

/// Requested sizes below [`MIN_CHUNK_ROWS`] are clamped to the floor.
pub fn row_chunks(total: usize, rows: usize) -> RowChunks {
    RowChunks {
        total,
        rows: rows.max(MIN_CHUNK_ROWS),
        next: 0,
    }
}

impl Iterator for RowChunks {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.next >= self.total {
            return None;
        }
        let start = self.next;
        let end = (start + self.rows).min(self.total);
        self.next = end;
        Some(start..end)
    }
}
