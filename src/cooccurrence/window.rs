//! The per-line context window: a history ring of recently seen
//! in-vocabulary ranks, and the distance-weighted pairs it produces for
//! each new target.

/// Circular buffer of the last `window` in-vocabulary ranks seen on the
/// current line, indexed by absolute in-vocabulary position modulo
/// `window`.
#[derive(Debug)]
pub struct HistoryRing {
    ring: Vec<i32>,
}

impl HistoryRing {
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            ring: vec![0; window.max(1)],
        }
    }

    /// Records `rank` as the token at in-vocabulary position `position`.
    pub fn set(&mut self, position: usize, rank: i32) {
        let len = self.ring.len();
        self.ring[position % len] = rank;
    }

    /// The rank stored for in-vocabulary position `position`.
    #[must_use]
    pub fn rank_at(&self, position: usize) -> i32 {
        self.ring[position % self.ring.len()]
    }
}

/// For a target at 0-based in-vocabulary position `j` with a window of
/// `window` positions, yields `(context_position, weight)` pairs for
/// every context in `[max(0, j - window), j)`, weight `1 / (j - k)`.
pub fn context_weights(j: usize, window: usize) -> impl Iterator<Item = (usize, f64)> {
    let start = j.saturating_sub(window);
    #[allow(clippy::cast_precision_loss)]
    (start..j).map(move |k| (k, 1.0 / (j - k) as f64))
}
