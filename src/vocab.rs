//! Vocabulary construction and ingestion.
//!
//! The builder (used by `vocab-count`) accumulates token counts from a
//! corpus and emits a ranked `word count` listing. The reader (used by
//! `cooccur`) loads that listing back into a word-to-rank lookup table.

use std::io::{BufRead, Read, Write};

use crate::error::Error;
use crate::hash_table::ChainedHashTable;
use crate::tokenize::{Token, Tokenizer};
use crate::verbose::Verbose;

/// Reserved token that may never appear in a corpus; it marks
/// out-of-vocabulary context during accumulation.
const UNKNOWN_TOKEN: &[u8] = b"<unk>";

/// Knobs controlling vocabulary construction.
#[derive(Debug, Clone, Copy)]
pub struct VocabConfig {
    /// Words occurring fewer than this many times are dropped. Zero keeps
    /// every observed word.
    pub min_count: u64,
    /// Keep only the `max_vocab` most frequent words. Zero means no cap.
    pub max_vocab: usize,
    /// Diagnostic verbosity: 0 silent, 1 progress milestones, 2+ per-batch
    /// and per-phase.
    pub verbose: Verbose,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            min_count: 1,
            max_vocab: 0,
            verbose: Verbose::new(0, false),
        }
    }
}

/// One ranked vocabulary entry as produced by [`build_vocabulary`].
pub type VocabEntry = (Box<[u8]>, u64);

/// Reads whitespace-tokenized text from `reader` and returns the
/// vocabulary: words sorted by descending count, ties broken
/// alphabetically by raw byte value, with `min_count`/`max_vocab` applied.
///
/// # Errors
///
/// Returns `Error::UnkInCorpus` if the literal token `<unk>` appears in
/// the corpus, or an I/O error if reading fails.
pub fn build_vocabulary<R: Read>(
    reader: R,
    config: &VocabConfig,
) -> Result<Vec<VocabEntry>, Error> {
    let mut table: ChainedHashTable<u64> = ChainedHashTable::new();
    let mut tokenizer = Tokenizer::new(reader);
    let mut tokens_seen: u64 = 0;

    while let Some(token) = tokenizer.next_token().map_err(|source| Error::Io {
        path: "<corpus>".to_string(),
        message: "failed to read corpus".to_string(),
        source,
    })? {
        let Token::Word(word) = token else {
            continue;
        };
        if word.as_slice() == UNKNOWN_TOKEN {
            return Err(Error::UnkInCorpus);
        }

        *table.get_or_insert_with(&word, || 0) += 1;
        tokens_seen += 1;
        if config.verbose.is_enabled(2) && tokens_seen % 100_000 == 0 {
            config.verbose.progress(
                2,
                &format!("vocab-count: processed {tokens_seen} tokens, {} distinct", table.len()),
            );
        }
    }

    config.verbose.progress(
        1,
        &format!("vocab-count: {tokens_seen} tokens, {} distinct words", table.len()),
    );
    config.verbose.progress(2, "vocab-count: accumulation done");

    let mut entries = table.into_entries();

    if config.max_vocab > 0 && config.max_vocab < entries.len() {
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(config.max_vocab);
    }

    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if let Some(cutoff) = entries.iter().position(|(_, count)| *count < config.min_count) {
        entries.truncate(cutoff);
    }

    config.verbose.progress(2, "vocab-count: sort done");

    Ok(entries)
}

/// Writes `entries` as `word count\n` lines, in the order given.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_vocabulary<W: Write>(
    entries: &[VocabEntry],
    writer: &mut W,
    verbose: &Verbose,
) -> Result<(), Error> {
    for (word, count) in entries {
        writer.write_all(word).and_then(|()| {
            writeln!(writer, " {count}")
        }).map_err(|source| Error::Io {
            path: "<vocabulary output>".to_string(),
            message: "failed to write vocabulary entry".to_string(),
            source,
        })?;
    }
    verbose.progress(2, "vocab-count: write done");
    Ok(())
}

/// A loaded vocabulary: word-to-rank lookup plus the rank count.
///
/// Ranks are 1-based and assigned in file order, matching the descending
/// frequency order the vocabulary file was written in.
#[derive(Debug)]
pub struct Vocabulary {
    ranks: ChainedHashTable<i32>,
    size: usize,
}

impl Vocabulary {
    /// Parses a `word count\n` listing from `reader` into a rank lookup.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedVocabLine` for a line without a trailing
    /// count field, or `Error::DuplicateVocabWord` if a word repeats.
    pub fn load<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut ranks: ChainedHashTable<i32> = ChainedHashTable::new();
        let mut size = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Io {
                path: "<vocabulary file>".to_string(),
                message: "failed to read vocabulary line".to_string(),
                source,
            })?;
            if line.is_empty() {
                continue;
            }
            let (word, _count) = line.rsplit_once(' ').ok_or_else(|| Error::MalformedVocabLine {
                line: line_no + 1,
                content: line.clone(),
            })?;

            size += 1;
            let rank = i32::try_from(size).map_err(|_| {
                Error::Internal("vocabulary exceeds i32::MAX entries".to_string())
            })?;
            ranks.insert_unique(word.as_bytes(), rank)?;
        }

        Ok(Self { ranks, size })
    }

    /// Looks up the 1-based rank of `word`, or `None` if out of vocabulary.
    #[must_use]
    pub fn rank_of(&self, word: &[u8]) -> Option<i32> {
        self.ranks.peek(word).copied()
    }

    /// Number of distinct words in the vocabulary.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }
}
