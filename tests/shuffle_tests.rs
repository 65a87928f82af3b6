//! Two-phase chunked shuffle tests: multiset preservation, actual
//! reordering, empty input, and run-file cleanup.

use std::fs;

use cooccur_pipeline::record::Record;
use cooccur_pipeline::shuffle::{shuffle, ShuffleConfig};
use tempfile::tempdir;

fn make_records(n: i32) -> Vec<Record> {
    (1..=n).map(|i| Record::new(i, i, f64::from(i))).collect()
}

fn read_all(bytes: &[u8]) -> Vec<Record> {
    let mut cursor = bytes;
    let mut records = Vec::new();
    while let Some(record) = Record::read_from(&mut cursor).expect("read ok") {
        records.push(record);
    }
    records
}

#[test]
fn scenario_e_preserves_multiset_across_chunk_boundaries() {
    let dir = tempdir().expect("tempdir");
    let records = make_records(500);
    let mut input = Vec::new();
    for record in &records {
        record.write_to(&mut input).expect("write");
    }

    let config = ShuffleConfig {
        array_size: Some(37),
        seed: Some(1234),
        ..ShuffleConfig::default()
    };
    let mut output = Vec::new();
    shuffle(&input[..], &config, dir.path(), &mut output).expect("shuffle ok");

    let mut shuffled = read_all(&output);
    assert_eq!(shuffled.len(), records.len());
    shuffled.sort_unstable();
    let mut expected = records.clone();
    expected.sort_unstable();
    assert_eq!(shuffled, expected);
}

#[test]
fn shuffle_actually_reorders_across_multiple_chunks() {
    let dir = tempdir().expect("tempdir");
    let records = make_records(200);
    let mut input = Vec::new();
    for record in &records {
        record.write_to(&mut input).expect("write");
    }

    let config = ShuffleConfig {
        array_size: Some(20),
        seed: Some(42),
        ..ShuffleConfig::default()
    };
    let mut output = Vec::new();
    shuffle(&input[..], &config, dir.path(), &mut output).expect("shuffle ok");

    let shuffled = read_all(&output);
    assert_ne!(shuffled, records);
}

#[test]
fn empty_input_produces_empty_output() {
    let dir = tempdir().expect("tempdir");
    let config = ShuffleConfig::default();
    let mut output = Vec::new();
    shuffle(&[][..], &config, dir.path(), &mut output).expect("shuffle ok");
    assert!(output.is_empty());
}

#[test]
fn cleans_up_run_files_on_success() {
    let dir = tempdir().expect("tempdir");
    let records = make_records(100);
    let mut input = Vec::new();
    for record in &records {
        record.write_to(&mut input).expect("write");
    }
    let config = ShuffleConfig {
        array_size: Some(10),
        seed: Some(5),
        ..ShuffleConfig::default()
    };
    let mut output = Vec::new();
    shuffle(&input[..], &config, dir.path(), &mut output).expect("shuffle ok");

    let leftover: Vec<_> = fs::read_dir(dir.path()).expect("read_dir").collect();
    assert!(leftover.is_empty());
}
