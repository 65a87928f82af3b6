//! External k-way merge of sorted, deduplicated run files into the final
//! co-occurrence stream.
//!
//! A min-heap keyed by `(w1, w2)` with a stable sequence-number
//! tie-break drives the merge; runs are read lazily one record at a
//! time, so memory use is bounded by the number of open runs rather than
//! their total size.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::record::Record;

struct HeapEntry {
    record: Record,
    run_index: usize,
    seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.record.key() == other.record.key() && self.seq == other.seq
    }
}
impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.record
            .key()
            .cmp(&other.record.key())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Merges `run_paths` into `output` as a single strictly sorted,
/// duplicate-free binary record stream, summing `v` across any records
/// that share a `(w1, w2)` key. Returns the number of records written.
///
/// # Errors
///
/// Returns an error if a run file cannot be opened, a read is short, or
/// a write to `output` fails.
pub fn merge_runs<W: Write>(run_paths: &[&Path], output: &mut W) -> Result<u64, Error> {
    let mut readers: Vec<BufReader<File>> = run_paths
        .iter()
        .map(|path| {
            File::open(path)
                .map(BufReader::new)
                .map_err(|source| Error::RunFileOpen {
                    path: path.display().to_string(),
                    source,
                })
        })
        .collect::<Result<_, _>>()?;

    let mut writer = BufWriter::new(output);
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    for (run_index, reader) in readers.iter_mut().enumerate() {
        if let Some(record) = Record::read_from(reader)? {
            heap.push(Reverse(HeapEntry {
                record,
                run_index,
                seq,
            }));
            seq += 1;
        }
    }

    let mut pending: Option<Record> = None;
    let mut written: u64 = 0;

    while let Some(Reverse(entry)) = heap.pop() {
        match &mut pending {
            Some(old) if old.key() == entry.record.key() => {
                old.v += entry.record.v;
            }
            Some(old) => {
                write_record(&mut writer, *old)?;
                written += 1;
                pending = Some(entry.record);
            }
            None => {
                pending = Some(entry.record);
            }
        }

        if let Some(next) = Record::read_from(&mut readers[entry.run_index])? {
            heap.push(Reverse(HeapEntry {
                record: next,
                run_index: entry.run_index,
                seq,
            }));
            seq += 1;
        }
    }

    if let Some(old) = pending {
        write_record(&mut writer, old)?;
        written += 1;
    }

    writer.flush().map_err(|source| Error::Io {
        path: "<merged output>".to_string(),
        message: "failed to flush merged output".to_string(),
        source,
    })?;

    Ok(written)
}

fn write_record<W: Write>(writer: &mut W, record: Record) -> Result<(), Error> {
    record.write_to(writer).map_err(|source| Error::Io {
        path: "<merged output>".to_string(),
        message: "failed to write merged record".to_string(),
        source,
    })
}
