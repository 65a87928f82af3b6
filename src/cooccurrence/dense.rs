//! The dense hot region `D`: a packed, jagged table of accumulated weights
//! for rank pairs below the frequency-product cutoff.
//!
//! `D` is addressed through a lookup table `L` rather than a full
//! `|V| x |V|` matrix: row `w1` reserves only as many cells as there are
//! valid `w2` values with `w1 * w2 < max_product`, so low-rank (frequent)
//! words get large dense rows and high-rank words get none at all.

/// Packed dense accumulation table plus its row-offset lookup table.
#[derive(Debug)]
pub struct DenseTable {
    /// `L[a]` is the cumulative cell count through row `a` (1-based),
    /// with `L[0] = 1` as a bias so the cell formula is offset-free at
    /// `(1, 1)`. Length `vocab_size + 1`.
    offsets: Vec<i64>,
    cells: Vec<f64>,
    max_product: i64,
}

impl DenseTable {
    /// Builds the lookup table and allocates (zero-initialized) dense
    /// storage for a vocabulary of `vocab_size` words and cutoff
    /// `max_product`.
    #[must_use]
    pub fn new(vocab_size: usize, max_product: i64) -> Self {
        let mut offsets = vec![0i64; vocab_size + 1];
        offsets[0] = 1;
        for a in 1..=vocab_size {
            let quota = max_product / a as i64;
            let width = if quota < vocab_size as i64 {
                quota.max(0)
            } else {
                vocab_size as i64
            };
            offsets[a] = offsets[a - 1] + width;
        }
        let cell_count = (offsets[vocab_size] - 1).max(0) as usize;
        Self {
            offsets,
            cells: vec![0.0; cell_count],
            max_product,
        }
    }

    /// Total number of allocated dense cells, `L[|V|] - 1`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(w1, w2)` falls in the dense region under this table's
    /// cutoff, per the `w1 < floor(max_product / w2)` test.
    #[must_use]
    pub fn is_dense(&self, w1: i32, w2: i32) -> bool {
        i64::from(w1) < self.max_product / i64::from(w2)
    }

    fn cell_index(&self, w1: i32, w2: i32) -> Option<usize> {
        let row_start = self.offsets[(w1 - 1) as usize];
        let index = row_start + i64::from(w2) - 2;
        usize::try_from(index).ok().filter(|&i| i < self.cells.len())
    }

    /// Adds `weight` to the dense cell for `(w1, w2)` if it is in bounds,
    /// returning whether the add landed. A `false` return means the
    /// caller should fall back to the overflow buffer; in a well-formed
    /// table built from a consistent `max_product` this should not
    /// happen, but the product-cutoff test and the row-width formula use
    /// different algebraic forms of the same inequality, so a defensive
    /// bounds check guards the boundary case.
    pub fn add(&mut self, w1: i32, w2: i32, weight: f64) -> bool {
        match self.cell_index(w1, w2) {
            Some(index) => {
                self.cells[index] += weight;
                true
            }
            None => false,
        }
    }

    /// Iterates over every nonzero cell as `(w1, w2, v)`, in row-major
    /// order, for emission as run 0000.
    pub fn nonzero_entries(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        let vocab_size = self.offsets.len() - 1;
        (1..=vocab_size).flat_map(move |w1| {
            let row_start = self.offsets[w1 - 1];
            let row_width = self.offsets[w1] - row_start;
            #[allow(clippy::cast_possible_truncation)]
            let w1_i32 = w1 as i32;
            (0..row_width).filter_map(move |offset| {
                #[allow(clippy::cast_possible_truncation)]
                let index = (row_start - 1 + offset) as usize;
                let v = self.cells[index];
                if v == 0.0 {
                    return None;
                }
                #[allow(clippy::cast_possible_truncation)]
                let w2 = (offset + 1) as i32;
                Some((w1_i32, w2, v))
            })
        })
    }
}
