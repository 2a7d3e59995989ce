//! Parallel evaluation of the upper-triangular pair space.
//!
//! Chunks of rows are processed one at a time; within a chunk each row `i`
//! is an independent unit, scheduled by rayon's work-stealing pool since
//! the inner loop length and window sizes vary per row. Records are
//! batched locally and handed to the sink in bounded flushes, so memory
//! stays bounded no matter how long the sequence is.

use rayon::prelude::*;
use std::ops::Range;

use crate::libs::chunk;
use crate::libs::lev;
use crate::libs::sink::{DistanceRecord, RecordSink};
use crate::libs::tier::TierPolicy;

/// Records buffered per worker before a flush to the sink.
pub const FLUSH_ROWS: usize = 1 << 14;

/// Evaluates every `i <= j` pair of the sequence.
///
/// Chunks are consumed in increasing order; a sink or pool error aborts
/// the run at the next flush. No retries.
pub fn run<S: RecordSink>(
    seq: &[u8],
    policy: &TierPolicy,
    chunk_rows: usize,
    sink: &S,
) -> anyhow::Result<()> {
    for rows in chunk::row_chunks(seq.len(), chunk_rows) {
        process_chunk(seq, rows, policy, sink)?;
    }
    Ok(())
}

/// Evaluates all pairs `(i, j)` with `i` in `rows` and `j` in `i..seq.len()`.
///
/// A pair whose window would cross the end of the sequence is skipped
/// silently; that is the defined edge policy, not an error.
pub fn process_chunk<S: RecordSink>(
    seq: &[u8],
    rows: Range<usize>,
    policy: &TierPolicy,
    sink: &S,
) -> anyhow::Result<()> {
    let n = seq.len();

    rows.into_par_iter().try_for_each(|i| -> anyhow::Result<()> {
        let mut batch: Vec<DistanceRecord> = Vec::new();

        for j in i..n {
            let window = policy.window_for(j - i);
            if i + window > n || j + window > n {
                continue;
            }

            let dist = lev::distance(&seq[i..i + window], &seq[j..j + window]);
            batch.push(DistanceRecord { i, j, dist });

            if batch.len() >= FLUSH_ROWS {
                sink.emit(std::mem::take(&mut batch))?;
            }
        }

        if !batch.is_empty() {
            sink.emit(batch)?;
        }
        Ok(())
    })
}
