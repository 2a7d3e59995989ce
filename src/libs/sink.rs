//! Output sinks for distance records.
//!
//! Workers hand over batches of records; a sink decides when they become
//! durable. [`StreamSink`] appends to the output as batches arrive, so
//! records already flushed survive an aborted run. [`MemorySink`]
//! accumulates everything and writes nothing until `dump()` is called.

use anyhow::anyhow;
use crossbeam::channel::Sender;
use std::io::Write;
use std::sync::Mutex;
use std::thread::JoinHandle;

/// In-flight batches queued between workers and the writer thread.
const QUEUE_DEPTH: usize = 64;

/// One `(i, j, distance)` triple. `j < i` pairs are implied by symmetry
/// and never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DistanceRecord {
    pub i: usize,
    pub j: usize,
    pub dist: usize,
}

impl std::fmt::Display for DistanceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.i, self.j, self.dist)
    }
}

/// Accepts record batches from concurrent workers.
///
/// `emit` may be called from any number of threads; batches from different
/// workers are appended whole, never interleaved record by record.
pub trait RecordSink: Sync {
    fn emit(&self, batch: Vec<DistanceRecord>) -> anyhow::Result<()>;
}

/// Streaming-append sink: a bounded channel feeds a dedicated writer
/// thread, one CSV line per record.
pub struct StreamSink {
    tx: Sender<Vec<DistanceRecord>>,
}

/// Joins the writer thread and surfaces its I/O result.
pub struct SinkHandle {
    thread: JoinHandle<anyhow::Result<usize>>,
}

impl StreamSink {
    /// Spawns the writer thread over an already-opened writer, so open
    /// failures are reported before any computation starts.
    ///
    /// Drop the sink (closing the channel) before calling
    /// [`SinkHandle::join`], or the writer thread never exits.
    pub fn spawn(mut wtr: Box<dyn Write + Send>) -> (Self, SinkHandle) {
        let (tx, rx) = crossbeam::channel::bounded::<Vec<DistanceRecord>>(QUEUE_DEPTH);

        let thread = std::thread::spawn(move || -> anyhow::Result<usize> {
            let mut rows = 0;
            for batch in rx {
                for rec in &batch {
                    writeln!(wtr, "{}", rec)?;
                }
                rows += batch.len();
            }
            wtr.flush()?;
            Ok(rows)
        });

        (Self { tx }, SinkHandle { thread })
    }
}

impl RecordSink for StreamSink {
    fn emit(&self, batch: Vec<DistanceRecord>) -> anyhow::Result<()> {
        // A closed channel means the writer thread died on an I/O error;
        // the real cause comes out of SinkHandle::join.
        self.tx
            .send(batch)
            .map_err(|_| anyhow!("output writer stopped accepting records"))
    }
}

impl SinkHandle {
    /// Number of records written, or the writer-side error.
    pub fn join(self) -> anyhow::Result<usize> {
        match self.thread.join() {
            Ok(res) => res,
            Err(_) => Err(anyhow!("output writer thread panicked")),
        }
    }
}

/// Bulk-accumulation sink: records stay in memory until dumped, so an
/// aborted run leaves no partial output.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<DistanceRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn records(&self) -> Vec<DistanceRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn into_records(self) -> Vec<DistanceRecord> {
        self.records.into_inner().unwrap()
    }

    /// Writes all accumulated records as CSV lines, in accumulation order.
    pub fn dump<W: Write>(&self, wtr: &mut W) -> anyhow::Result<usize> {
        let records = self.records.lock().unwrap();
        for rec in records.iter() {
            writeln!(wtr, "{}", rec)?;
        }
        Ok(records.len())
    }
}

impl RecordSink for MemorySink {
    fn emit(&self, batch: Vec<DistanceRecord>) -> anyhow::Result<()> {
        self.records.lock().unwrap().extend(batch);
        Ok(())
    }
}
