//! `vocab-count`: reads whitespace-tokenized text from stdin and writes a
//! frequency-ranked vocabulary listing to stdout.

use std::io::{self, Write};
use std::process::ExitCode as ProcessExitCode;

use anyhow::Result;
use clap::Parser;

use cooccur_pipeline::exit_code::ExitCode;
use cooccur_pipeline::verbose::Verbose;
use cooccur_pipeline::vocab::{build_vocabulary, write_vocabulary, VocabConfig};

/// Builds a frequency-ranked vocabulary from whitespace-tokenized text on
/// standard input.
#[derive(Debug, Parser)]
#[command(name = "vocab-count", author, version, about)]
struct Args {
    /// Exclude words appearing fewer than `min_count` times.
    #[arg(short = 'm', long, default_value_t = 1, value_name = "COUNT")]
    min_count: u64,

    /// Keep only the most frequent `max_vocab` words (0 = no cap).
    #[arg(short = 'x', long, default_value_t = 0, value_name = "COUNT")]
    max_vocab: usize,

    /// Diagnostic verbosity (0, 1, or 2).
    #[arg(short, long, default_value_t = 0, value_name = "LEVEL")]
    verbose: u8,
}

impl From<&Args> for VocabConfig {
    fn from(args: &Args) -> Self {
        Self {
            min_count: args.min_count,
            max_vocab: args.max_vocab,
            verbose: Verbose::new(args.verbose, false),
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = VocabConfig::from(&args);

    let entries = build_vocabulary(io::stdin().lock(), &config)?;

    let stdout = io::stdout();
    let mut writer = io::BufWriter::new(stdout.lock());
    write_vocabulary(&entries, &mut writer, &config.verbose)?;
    writer.flush()?;

    Ok(())
}

fn main() -> ProcessExitCode {
    match run() {
        Ok(()) => ProcessExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vocab-count: {err:#}");
            ProcessExitCode::from(ExitCode::from_error(&err).code() as u8)
        }
    }
}
