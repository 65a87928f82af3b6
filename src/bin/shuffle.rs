//! `shuffle`: reads a binary co-occurrence record stream from stdin and
//! writes a uniformly permuted stream of the same records to stdout.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use anyhow::Result;
use clap::Parser;

use cooccur_pipeline::exit_code::ExitCode;
use cooccur_pipeline::shuffle::{shuffle, ShuffleConfig};
use cooccur_pipeline::verbose::Verbose;

/// Permutes a binary co-occurrence record stream via a two-phase chunked
/// shuffle bounded by a memory ceiling.
#[derive(Debug, Parser)]
#[command(name = "shuffle", author, version, about)]
struct Args {
    /// Soft memory ceiling in gigabytes, used to size the chunk buffer.
    #[arg(short = 'M', long, default_value_t = 4.0, value_name = "GB")]
    memory_limit: f64,

    /// Override the computed chunk buffer size, in records.
    #[arg(long, value_name = "COUNT")]
    array_size: Option<usize>,

    /// Prefix for intermediate run files.
    #[arg(long, default_value = "temp_shuffle", value_name = "PREFIX")]
    temp_file: String,

    /// Directory to write run files under.
    #[arg(long, default_value = ".", value_name = "DIR")]
    run_dir: PathBuf,

    /// Fix the PRNG seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Diagnostic verbosity (0, 1, or 2).
    #[arg(short, long, default_value_t = 0, value_name = "LEVEL")]
    verbose: u8,
}

impl From<&Args> for ShuffleConfig {
    fn from(args: &Args) -> Self {
        Self {
            memory_limit_gib: args.memory_limit,
            array_size: args.array_size,
            temp_prefix: args.temp_file.clone(),
            seed: args.seed,
            verbose: Verbose::new(args.verbose, false),
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = ShuffleConfig::from(&args);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    shuffle(io::stdin().lock(), &config, &args.run_dir, &mut writer)?;
    writer.flush()?;

    Ok(())
}

fn main() -> ProcessExitCode {
    match run() {
        Ok(()) => ProcessExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shuffle: {err:#}");
            ProcessExitCode::from(ExitCode::from_error(&err).code() as u8)
        }
    }
}
