//! The overflow buffer `O` and the run files it spills to.
//!
//! Pairs that fall outside the dense cutoff accumulate here; when the
//! buffer nears its budget it is sorted, adjacent duplicates are merged
//! by summing weight, and the compacted result is appended as a new run
//! file. Unlike the fixed-capacity array this is modeled on, the buffer
//! itself is a plain growable `Vec` — the flush threshold still governs
//! *when* a run is cut, but there is no fixed-size overrun to guard
//! against.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::record::Record;
use crate::verbose::Verbose;

/// Accumulates sparse (non-dense) pair contributions and periodically
/// spills them to sorted, deduplicated run files.
#[derive(Debug)]
pub struct OverflowBuffer {
    records: Vec<Record>,
    flush_threshold: usize,
    run_dir: PathBuf,
    prefix: String,
    next_run_index: u32,
    run_paths: Vec<PathBuf>,
    verbose: Verbose,
}

impl OverflowBuffer {
    /// Creates a buffer that flushes once its length reaches
    /// `overflow_length - window` (saturating at zero), writing runs
    /// named `<prefix>_NNNN.bin` under `run_dir` starting at index 1
    /// (index 0 is reserved for the dense table's dump).
    #[must_use]
    pub fn new(
        run_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        overflow_length: usize,
        window: usize,
        verbose: Verbose,
    ) -> Self {
        let flush_threshold = overflow_length.saturating_sub(window).max(1);
        Self {
            records: Vec::with_capacity(overflow_length),
            flush_threshold,
            run_dir: run_dir.into(),
            prefix: prefix.into(),
            next_run_index: 1,
            run_paths: Vec::new(),
            verbose,
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    #[must_use]
    pub fn should_flush(&self) -> bool {
        self.records.len() >= self.flush_threshold
    }

    /// Sorts, deduplicates (summing weight), and writes the buffer's
    /// contents as a new run file. A no-op if the buffer is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the run file cannot be created or written.
    pub fn flush(&mut self) -> Result<(), Error> {
        if self.records.is_empty() {
            return Ok(());
        }

        self.records.sort_unstable();
        dedup_sum_adjacent(&mut self.records);

        let path = self
            .run_dir
            .join(format!("{}_{:04}.bin", self.prefix, self.next_run_index));
        write_records(&path, self.records.iter().copied())?;

        self.verbose.progress(
            2,
            &format!(
                "cooccur: flushed run {} ({} records)",
                path.display(),
                self.records.len()
            ),
        );

        self.run_paths.push(path);
        self.next_run_index += 1;
        self.records.clear();
        Ok(())
    }

    /// Paths of every run file written so far.
    #[must_use]
    pub fn run_paths(&self) -> &[PathBuf] {
        &self.run_paths
    }
}

/// Merges adjacent records with equal `(w1, w2)` keys by summing `v`.
/// Assumes `records` is already sorted by key.
fn dedup_sum_adjacent(records: &mut Vec<Record>) {
    let mut write = 0;
    for read in 1..records.len() {
        if records[read].key() == records[write].key() {
            records[write].v += records[read].v;
        } else {
            write += 1;
            records[write] = records[read];
        }
    }
    records.truncate(write + 1);
}

/// Writes `records` to a new file at `path` in the fixed binary layout.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a write fails.
pub fn write_records(path: &Path, records: impl Iterator<Item = Record>) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| Error::RunFileOpen {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    for record in records {
        record.write_to(&mut writer).map_err(|source| Error::Io {
            path: path.display().to_string(),
            message: "failed to write run record".to_string(),
            source,
        })?;
    }
    writer.flush().map_err(|source| Error::Io {
        path: path.display().to_string(),
        message: "failed to flush run file".to_string(),
        source,
    })
}
