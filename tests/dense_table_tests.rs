//! Dense table allocation, cell addressing, and cutoff tests.

use cooccur_pipeline::cooccurrence::dense::DenseTable;

#[test]
fn allocates_jagged_rows() {
    // vocab_size=3, max_product large enough that every row gets the
    // full vocab_size width.
    let table = DenseTable::new(3, 100);
    assert!(table.cell_count() >= 9);
}

#[test]
fn add_and_read_back_a_cell() {
    let mut table = DenseTable::new(3, 100);
    assert!(table.add(1, 2, 1.5));
    assert!(table.add(1, 2, 0.5));
    let entries: Vec<_> = table.nonzero_entries().collect();
    assert_eq!(entries, vec![(1, 2, 2.0)]);
}

#[test]
fn small_max_product_confines_high_rank_pairs_to_overflow() {
    let table = DenseTable::new(10, 5);
    assert!(table.is_dense(1, 2));
    assert!(!table.is_dense(4, 4));
}

#[test]
fn nonzero_entries_skip_untouched_cells() {
    let mut table = DenseTable::new(4, 100);
    table.add(2, 3, 4.0);
    let entries: Vec<_> = table.nonzero_entries().collect();
    assert_eq!(entries, vec![(2, 3, 4.0)]);
}
