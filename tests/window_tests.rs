//! Context-window weighting and history-ring tests.

use cooccur_pipeline::cooccurrence::window::{context_weights, HistoryRing};

#[test]
fn yields_nothing_at_line_start() {
    let weights: Vec<_> = context_weights(0, 5).collect();
    assert!(weights.is_empty());
}

#[test]
fn weights_decay_with_distance() {
    let weights: Vec<_> = context_weights(3, 2).collect();
    assert_eq!(weights, vec![(1, 0.5), (2, 1.0)]);
}

#[test]
fn window_caps_how_far_back_context_reaches() {
    let weights: Vec<_> = context_weights(10, 2).collect();
    assert_eq!(weights, vec![(8, 0.5), (9, 1.0)]);
}

#[test]
fn history_ring_wraps_around_capacity() {
    let mut ring = HistoryRing::new(3);
    ring.set(0, 10);
    ring.set(1, 20);
    ring.set(2, 30);
    ring.set(3, 40);
    assert_eq!(ring.rank_at(3), 40);
    assert_eq!(ring.rank_at(0), 40);
    assert_eq!(ring.rank_at(1), 20);
}
