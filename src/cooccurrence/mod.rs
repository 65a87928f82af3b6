//! The co-occurrence accumulator (C): windowed pair weighting, a
//! dense/sparse split, and an external merge into one sorted stream.

pub mod dense;
pub mod merge;
pub mod overflow;
pub mod window;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::memory::AccumulatorMemoryPlan;
use crate::record::Record;
use crate::tokenize::{Token, Tokenizer};
use crate::verbose::Verbose;
use crate::vocab::Vocabulary;

use dense::DenseTable;
use overflow::OverflowBuffer;
use window::{context_weights, HistoryRing};

/// Knobs controlling co-occurrence accumulation.
#[derive(Debug, Clone)]
pub struct AccumulatorConfig {
    pub window: usize,
    pub symmetric: bool,
    pub memory_limit_gib: f64,
    pub max_product: Option<i64>,
    pub overflow_length: Option<usize>,
    pub overflow_prefix: String,
    pub verbose: Verbose,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            window: 15,
            symmetric: true,
            memory_limit_gib: 4.0,
            max_product: None,
            overflow_length: None,
            overflow_prefix: "overflow".to_string(),
            verbose: Verbose::new(0, false),
        }
    }
}

/// Reads whitespace-tokenized `corpus`, accumulates weighted co-occurrence
/// pairs against `vocab` under `config`, and writes the final sorted,
/// deduplicated binary record stream to `output`. Run files are created
/// and cleaned up under `run_dir`.
///
/// # Errors
///
/// Returns an error on I/O failure, a short read on a run file, or an
/// inability to create a run file.
pub fn accumulate<R: std::io::Read, W: Write>(
    corpus: R,
    vocab: &Vocabulary,
    config: &AccumulatorConfig,
    run_dir: &Path,
    output: &mut W,
) -> Result<(), Error> {
    let plan = AccumulatorMemoryPlan::from_budget(config.memory_limit_gib);
    let max_product = config.max_product.unwrap_or(plan.max_product);
    let overflow_length = config.overflow_length.unwrap_or(plan.overflow_length);
    let window = config.window.max(1);

    config.verbose.progress(
        1,
        &format!(
            "cooccur: vocab={} max_product={max_product} overflow_length={overflow_length} window={window}",
            vocab.len()
        ),
    );

    let mut dense = DenseTable::new(vocab.len(), max_product);
    let mut overflow = OverflowBuffer::new(
        run_dir,
        &config.overflow_prefix,
        overflow_length,
        window,
        config.verbose,
    );
    let mut history = HistoryRing::new(window);
    let mut tokenizer = Tokenizer::new(corpus);
    let mut j: usize = 0;
    let mut lines_seen: u64 = 0;

    while let Some(token) = tokenizer.next_token().map_err(|source| Error::Io {
        path: "<corpus>".to_string(),
        message: "failed to read corpus".to_string(),
        source,
    })? {
        if overflow.should_flush() {
            overflow.flush()?;
        }

        let word = match token {
            Token::LineBreak => {
                j = 0;
                lines_seen += 1;
                continue;
            }
            Token::Word(word) => word,
        };

        let Some(w2) = vocab.rank_of(&word) else {
            continue;
        };

        for (k, weight) in context_weights(j, window) {
            let w1 = history.rank_at(k);
            add_pair(&mut dense, &mut overflow, w1, w2, weight);
            if config.symmetric {
                add_pair(&mut dense, &mut overflow, w2, w1, weight);
            }
        }

        history.set(j, w2);
        j += 1;
    }

    overflow.flush()?;

    config.verbose.progress(
        1,
        &format!(
            "cooccur: {lines_seen} lines processed, {} overflow runs",
            overflow.run_paths().len()
        ),
    );

    let dense_run_path = run_dir.join(format!("{}_0000.bin", config.overflow_prefix));
    overflow::write_records(
        &dense_run_path,
        dense.nonzero_entries().map(|(w1, w2, v)| Record::new(w1, w2, v)),
    )?;

    let mut run_paths: Vec<PathBuf> = vec![dense_run_path];
    run_paths.extend(overflow.run_paths().iter().cloned());

    let borrowed: Vec<&Path> = run_paths.iter().map(PathBuf::as_path).collect();
    let record_count = merge::merge_runs(&borrowed, output)?;

    config.verbose.progress(
        1,
        &format!(
            "cooccur: merged {} runs into {record_count} records",
            run_paths.len()
        ),
    );

    for path in &run_paths {
        let _ = fs::remove_file(path);
    }

    Ok(())
}

fn add_pair(dense: &mut DenseTable, overflow: &mut OverflowBuffer, w1: i32, w2: i32, weight: f64) {
    if dense.is_dense(w1, w2) && dense.add(w1, w2, weight) {
        return;
    }
    overflow.push(Record::new(w1, w2, weight));
}
