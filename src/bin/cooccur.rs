//! `cooccur`: reads a vocabulary file and whitespace-tokenized text from
//! stdin, and writes a sorted, deduplicated binary co-occurrence record
//! stream to stdout.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use anyhow::Result;
use clap::Parser;

use cooccur_pipeline::cooccurrence::{accumulate, AccumulatorConfig};
use cooccur_pipeline::error::Error;
use cooccur_pipeline::exit_code::ExitCode;
use cooccur_pipeline::verbose::Verbose;
use cooccur_pipeline::vocab::Vocabulary;

/// Accumulates windowed word-word co-occurrence weights from
/// whitespace-tokenized text on standard input.
#[derive(Debug, Parser)]
#[command(name = "cooccur", author, version, about)]
struct Args {
    /// Path to the vocabulary file produced by `vocab-count`.
    #[arg(short = 'V', long, value_name = "PATH")]
    vocab_file: PathBuf,

    /// Context window width.
    #[arg(short, long, default_value_t = 15, value_name = "SIZE")]
    window_size: usize,

    /// Emit both (context, target) and (target, context) contributions.
    #[arg(short, long, default_value_t = 1, value_name = "0|1")]
    symmetric: u8,

    /// Soft memory ceiling in gigabytes, used to size the dense table,
    /// overflow buffer, and run files.
    #[arg(short = 'M', long, default_value_t = 4.0, value_name = "GB")]
    memory_limit: f64,

    /// Override the computed dense/sparse frequency-product cutoff.
    #[arg(long, value_name = "PRODUCT")]
    max_product: Option<i64>,

    /// Override the computed overflow-buffer flush threshold.
    #[arg(long, value_name = "COUNT")]
    overflow_length: Option<usize>,

    /// Prefix for overflow and dense-dump run files.
    #[arg(long, default_value = "overflow", value_name = "PREFIX")]
    overflow_file: String,

    /// Directory to write run files under.
    #[arg(long, default_value = ".", value_name = "DIR")]
    run_dir: PathBuf,

    /// Diagnostic verbosity (0, 1, or 2).
    #[arg(short, long, default_value_t = 0, value_name = "LEVEL")]
    verbose: u8,
}

impl TryFrom<&Args> for AccumulatorConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self> {
        Ok(Self {
            window: args.window_size,
            symmetric: args.symmetric != 0,
            memory_limit_gib: args.memory_limit,
            max_product: args.max_product,
            overflow_length: args.overflow_length,
            overflow_prefix: args.overflow_file.clone(),
            verbose: Verbose::new(args.verbose, false),
        })
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = AccumulatorConfig::try_from(&args)?;

    let vocab_file = File::open(&args.vocab_file).map_err(|_source| Error::MissingVocab {
        path: args.vocab_file.display().to_string(),
    })?;
    let vocab = Vocabulary::load(BufReader::new(vocab_file))?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    accumulate(io::stdin().lock(), &vocab, &config, &args.run_dir, &mut writer)?;
    writer.flush()?;

    Ok(())
}

fn main() -> ProcessExitCode {
    match run() {
        Ok(()) => ProcessExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cooccur: {err:#}");
            ProcessExitCode::from(ExitCode::from_error(&err).code() as u8)
        }
    }
}
