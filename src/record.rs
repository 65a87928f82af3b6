//! The on-disk/on-pipe co-occurrence record: `(w1, w2, v)`.
//!
//! A record is exactly `size_of::<i32>() * 2 + size_of::<f64>()` bytes,
//! written in host byte order with no padding. The format is not portable
//! across architectures, matching the pipeline's original design.

use std::cmp::Ordering;
use std::io::{self, Read, Write};

use crate::error::Error;

/// Size in bytes of one encoded [`Record`].
pub const RECORD_SIZE: usize = 4 + 4 + 8;

/// A single weighted co-occurrence observation between two vocabulary ranks.
///
/// `w1` and `w2` are 1-based frequency ranks produced by the vocabulary
/// builder; `v` is the accumulated weight. Records are totally ordered by
/// `(w1, w2)` so the same comparator drives overflow-buffer sorting and the
/// external merge's heap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub w1: i32,
    pub w2: i32,
    pub v: f64,
}

impl Record {
    #[must_use]
    pub const fn new(w1: i32, w2: i32, v: f64) -> Self {
        Self { w1, w2, v }
    }

    /// The `(w1, w2)` key used for ordering and duplicate detection.
    #[must_use]
    pub const fn key(&self) -> (i32, i32) {
        (self.w1, self.w2)
    }

    /// Encodes this record into its fixed 16-byte layout.
    #[must_use]
    pub fn to_bytes(self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[0..4].copy_from_slice(&self.w1.to_ne_bytes());
        buf[4..8].copy_from_slice(&self.w2.to_ne_bytes());
        buf[8..16].copy_from_slice(&self.v.to_ne_bytes());
        buf
    }

    /// Decodes a record from its fixed 16-byte layout.
    #[must_use]
    pub fn from_bytes(buf: [u8; RECORD_SIZE]) -> Self {
        let w1 = i32::from_ne_bytes(buf[0..4].try_into().expect("4-byte slice"));
        let w2 = i32::from_ne_bytes(buf[4..8].try_into().expect("4-byte slice"));
        let v = f64::from_ne_bytes(buf[8..16].try_into().expect("8-byte slice"));
        Self { w1, w2, v }
    }

    /// Writes this record to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn write_to<W: Write>(self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Reads one record from `reader`, or `None` at a clean EOF boundary.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShortRead` if the stream ends partway through a
    /// record, or the underlying I/O error otherwise.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Option<Self>, Error> {
        let mut buf = [0u8; RECORD_SIZE];
        let mut filled = 0;

        loop {
            match reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Io {
                        path: "<record stream>".to_string(),
                        message: "failed to read record".to_string(),
                        source,
                    });
                }
            }
            if filled == RECORD_SIZE {
                break;
            }
        }

        if filled == 0 {
            return Ok(None);
        }
        if filled != RECORD_SIZE {
            return Err(Error::ShortRead {
                expected: RECORD_SIZE,
                actual: filled,
            });
        }

        Ok(Some(Self::from_bytes(buf)))
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
