//! The shuffler (S): a two-phase chunked shuffle that permutes a record
//! stream without loading it all into memory.

pub mod rng;

use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::cooccurrence::overflow::write_records;
use crate::error::Error;
use crate::memory::shuffle_array_size;
use crate::record::{Record, RECORD_SIZE};
use crate::verbose::Verbose;

/// Knobs controlling the shuffle.
#[derive(Debug, Clone)]
pub struct ShuffleConfig {
    pub memory_limit_gib: f64,
    pub array_size: Option<usize>,
    pub temp_prefix: String,
    /// Fixes the PRNG seed for reproducible output; `None` seeds from
    /// system entropy.
    pub seed: Option<u64>,
    pub verbose: Verbose,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            memory_limit_gib: 4.0,
            array_size: None,
            temp_prefix: "temp_shuffle".to_string(),
            seed: None,
            verbose: Verbose::new(0, false),
        }
    }
}

/// Reads the binary record stream `input`, permutes it in two chunked
/// passes bounded by the configured array size, and writes the result to
/// `output`. Run files are created and cleaned up under `run_dir`.
///
/// # Errors
///
/// Returns an error on I/O failure, a short read on a run file, or an
/// inability to create a run file.
pub fn shuffle<R: Read, W: Write>(
    input: R,
    config: &ShuffleConfig,
    run_dir: &Path,
    output: &mut W,
) -> Result<(), Error> {
    let array_size = config
        .array_size
        .unwrap_or_else(|| shuffle_array_size(config.memory_limit_gib, RECORD_SIZE))
        .max(1);
    let mut generator = rng::build_rng(config.seed);
    let mut reader = input;

    let run_paths = chunk_and_shuffle(&mut reader, array_size, run_dir, &config.temp_prefix, &mut generator)?;
    config
        .verbose
        .progress(1, &format!("shuffle: wrote {} chunk runs", run_paths.len()));

    if run_paths.is_empty() {
        return Ok(());
    }

    interleave_and_shuffle(&run_paths, array_size, output, &mut generator)?;

    for path in &run_paths {
        let _ = fs::remove_file(path);
    }

    Ok(())
}

/// Phase 1: fills a buffer of up to `array_size` records at a time,
/// shuffles it, and writes it out as a new run file. The last, possibly
/// partial, buffer is still shuffled and written.
fn chunk_and_shuffle<R: Read>(
    reader: &mut R,
    array_size: usize,
    run_dir: &Path,
    prefix: &str,
    rng: &mut rand::rngs::StdRng,
) -> Result<Vec<PathBuf>, Error> {
    let mut run_paths = Vec::new();
    let mut run_index: u32 = 0;

    loop {
        let mut buffer = Vec::with_capacity(array_size.min(1 << 16));
        while buffer.len() < array_size {
            match Record::read_from(reader)? {
                Some(record) => buffer.push(record),
                None => break,
            }
        }
        if buffer.is_empty() {
            break;
        }

        rng::fisher_yates(&mut buffer, rng);

        let path = run_dir.join(format!("{prefix}_{run_index:04}.bin"));
        write_records(&path, buffer.into_iter())?;
        run_paths.push(path);
        run_index += 1;
    }

    Ok(run_paths)
}

/// Phase 2: repeatedly reads up to `array_size / k` records from each
/// still-open run in round-robin order, shuffles the combined buffer,
/// and writes it to `output`, until every run is exhausted.
fn interleave_and_shuffle<W: Write>(
    run_paths: &[PathBuf],
    array_size: usize,
    output: &mut W,
    rng: &mut rand::rngs::StdRng,
) -> Result<(), Error> {
    let k = run_paths.len();
    let per_run_quota = (array_size / k).max(1);

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
    let mut exhausted = vec![false; k];

    loop {
        let mut buffer = Vec::new();
        for (idx, reader) in readers.iter_mut().enumerate() {
            if exhausted[idx] {
                continue;
            }
            for _ in 0..per_run_quota {
                match Record::read_from(reader)? {
                    Some(record) => buffer.push(record),
                    None => {
                        exhausted[idx] = true;
                        break;
                    }
                }
            }
        }

        if buffer.is_empty() {
            break;
        }

        rng::fisher_yates(&mut buffer, rng);
        for record in buffer {
            record.write_to(output).map_err(|source| Error::Io {
                path: "<shuffled output>".to_string(),
                message: "failed to write shuffled record".to_string(),
                source,
            })?;
        }
    }

    Ok(())
}
