//! Shuffle PRNG and Fisher-Yates tests.

use cooccur_pipeline::shuffle::rng::{build_rng, fisher_yates};

#[test]
fn shuffle_preserves_multiset() {
    let mut rng = build_rng(Some(42));
    let mut items: Vec<i32> = (0..100).collect();
    let original = items.clone();
    fisher_yates(&mut items, &mut rng);

    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, original);
}

#[test]
fn shuffle_actually_moves_things_with_high_probability() {
    let mut rng = build_rng(Some(7));
    let mut items: Vec<i32> = (0..50).collect();
    let original = items.clone();
    fisher_yates(&mut items, &mut rng);
    assert_ne!(items, original);
}

#[test]
fn single_element_is_a_no_op() {
    let mut rng = build_rng(Some(1));
    let mut items = vec![42];
    fisher_yates(&mut items, &mut rng);
    assert_eq!(items, vec![42]);
}

#[test]
fn same_seed_is_reproducible() {
    let mut a: Vec<i32> = (0..20).collect();
    let mut b = a.clone();
    fisher_yates(&mut a, &mut build_rng(Some(99)));
    fisher_yates(&mut b, &mut build_rng(Some(99)));
    assert_eq!(a, b);
}
