//! Error types for the co-occurrence pipeline.

use std::io;
use thiserror::Error;

/// Structured error types shared by `vocab-count`, `cooccur`, and `shuffle`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reserved token \"<unk>\" found in corpus")]
    UnkInCorpus,

    #[error("duplicate word \"{word}\" in vocabulary file")]
    DuplicateVocabWord { word: String },

    #[error("missing vocabulary file: {path}")]
    MissingVocab { path: String },

    #[error("malformed vocabulary line {line}: {content:?}")]
    MalformedVocabLine { line: usize, content: String },

    #[error("I/O at {path}: {message}")]
    Io {
        path: String,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("short write: expected {expected} bytes, wrote {actual}")]
    ShortWrite { expected: usize, actual: usize },

    #[error("failed to open run file {path}: {source}")]
    RunFileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("internal consistency warning: {0}")]
    Internal(String),
}
