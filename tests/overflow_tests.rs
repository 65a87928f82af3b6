//! Overflow buffer flush, dedup, and threshold tests.

use cooccur_pipeline::cooccurrence::overflow::OverflowBuffer;
use cooccur_pipeline::record::Record;
use cooccur_pipeline::verbose::Verbose;
use tempfile::tempdir;

#[test]
fn flushes_sorted_and_deduplicated() {
    let dir = tempdir().expect("tempdir");
    let mut buffer = OverflowBuffer::new(dir.path(), "overflow", 10, 2, Verbose::new(0, false));
    buffer.push(Record::new(2, 1, 1.0));
    buffer.push(Record::new(1, 1, 2.0));
    buffer.push(Record::new(1, 1, 0.5));
    buffer.flush().expect("flush ok");

    let path = &buffer.run_paths()[0];
    assert_eq!(path.file_name().unwrap(), "overflow_0001.bin");

    let bytes = std::fs::read(path).expect("read run file");
    assert_eq!(bytes.len(), 2 * cooccur_pipeline::record::RECORD_SIZE);
    let mut cursor = &bytes[..];
    let first = Record::read_from(&mut cursor).expect("read ok").expect("some");
    let second = Record::read_from(&mut cursor).expect("read ok").expect("some");
    assert_eq!(first, Record::new(1, 1, 2.5));
    assert_eq!(second, Record::new(2, 1, 1.0));
}

#[test]
fn should_flush_reports_threshold() {
    let dir = tempdir().expect("tempdir");
    let mut buffer = OverflowBuffer::new(dir.path(), "overflow", 4, 1, Verbose::new(0, false));
    assert!(!buffer.should_flush());
    buffer.push(Record::new(1, 1, 1.0));
    buffer.push(Record::new(1, 2, 1.0));
    buffer.push(Record::new(1, 3, 1.0));
    assert!(buffer.should_flush());
}

#[test]
fn empty_flush_is_a_no_op() {
    let dir = tempdir().expect("tempdir");
    let mut buffer = OverflowBuffer::new(dir.path(), "overflow", 10, 2, Verbose::new(0, false));
    buffer.flush().expect("flush ok");
    assert!(buffer.run_paths().is_empty());
}
