//! Library crate backing the `vocab-count`, `cooccur`, and `shuffle`
//! binaries: a corpus-to-vocabulary builder, a windowed co-occurrence
//! accumulator with a dense/sparse split and external merge, and a
//! two-phase chunked shuffler.

pub mod cooccurrence;
pub mod error;
pub mod exit_code;
pub mod hash_table;
pub mod memory;
pub mod record;
pub mod shuffle;
pub mod tokenize;
pub mod verbose;
pub mod vocab;

pub use error::Error;
pub use exit_code::ExitCode;
pub use record::Record;
