//! External k-way merge tests: duplicate-key summing, pass-through, and
//! the empty-input edge case.

use cooccur_pipeline::cooccurrence::merge::merge_runs;
use cooccur_pipeline::cooccurrence::overflow::write_records;
use cooccur_pipeline::record::Record;
use tempfile::tempdir;

fn read_all(bytes: &[u8]) -> Vec<Record> {
    let mut cursor = bytes;
    let mut records = Vec::new();
    while let Some(record) = Record::read_from(&mut cursor).expect("read ok") {
        records.push(record);
    }
    records
}

#[test]
fn merges_and_sums_duplicate_keys_across_runs() {
    let dir = tempdir().expect("tempdir");
    let run_a = dir.path().join("a.bin");
    let run_b = dir.path().join("b.bin");
    write_records(&run_a, vec![Record::new(1, 1, 1.0), Record::new(2, 2, 1.0)].into_iter())
        .expect("write a");
    write_records(&run_b, vec![Record::new(1, 1, 0.5), Record::new(1, 3, 2.0)].into_iter())
        .expect("write b");

    let mut output = Vec::new();
    let count = merge_runs(&[run_a.as_path(), run_b.as_path()], &mut output).expect("merge ok");
    assert_eq!(count, 3);

    let records = read_all(&output);
    assert_eq!(
        records,
        vec![
            Record::new(1, 1, 1.5),
            Record::new(1, 3, 2.0),
            Record::new(2, 2, 1.0),
        ]
    );
}

#[test]
fn single_run_passes_through_unchanged() {
    let dir = tempdir().expect("tempdir");
    let run = dir.path().join("only.bin");
    write_records(&run, vec![Record::new(1, 2, 3.0)].into_iter()).expect("write");

    let mut output = Vec::new();
    let count = merge_runs(&[run.as_path()], &mut output).expect("merge ok");
    assert_eq!(count, 1);
    assert_eq!(read_all(&output), vec![Record::new(1, 2, 3.0)]);
}

#[test]
fn empty_run_list_produces_empty_output() {
    let mut output = Vec::new();
    let count = merge_runs(&[], &mut output).expect("merge ok");
    assert_eq!(count, 0);
    assert!(output.is_empty());
}
