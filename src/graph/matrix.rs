//! Dense square matrices for the sentence graph
//!
//! Every sentence pair gets a weight, so the graph is stored densely in
//! row-major order. Row `i` holds the outgoing edge weights of node `i`.

/// A row-major N×N matrix of `f64`
#[derive(Debug, Clone, PartialEq, Default)]
struct SquareMatrix {
    size: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            debug_assert_eq!(row.len(), size);
            data.extend(row);
        }
        Self { size, data }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    #[inline]
    fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }
}

/// Pairwise sentence similarity weights.
///
/// Non-negative, symmetric, zero on the diagonal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityMatrix {
    inner: SquareMatrix,
}

impl SimilarityMatrix {
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self {
            inner: SquareMatrix::from_rows(rows),
        }
    }

    /// Number of sentences (nodes)
    pub fn size(&self) -> usize {
        self.inner.size
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.inner.get(i, j)
    }

    /// All similarities of sentence `i`
    pub fn row(&self, i: usize) -> &[f64] {
        self.inner.row(i)
    }

    /// Sum of row `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Check `sim[i][j] == sim[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| ((i + 1)..n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Turn the weights into transition probabilities.
    ///
    /// Each row is divided by its own sum. A row summing to zero (a sentence
    /// sharing no tokens with any other) is left as the zero row.
    pub fn normalize_rows(self) -> TransitionMatrix {
        let mut inner = self.inner;
        let n = inner.size;
        for row in inner.data.chunks_mut(n.max(1)) {
            let sum: f64 = row.iter().sum();
            if sum > 0.0 {
                for weight in row.iter_mut() {
                    *weight /= sum;
                }
            }
        }
        TransitionMatrix { inner }
    }
}

/// Row-normalized similarity matrix used as the random-walk transition.
///
/// Every row sums to 1.0 or is entirely zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionMatrix {
    inner: SquareMatrix,
}

impl TransitionMatrix {
    /// Number of nodes
    pub fn size(&self) -> usize {
        self.inner.size
    }

    /// Transition probability from node `from` to node `to`
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.inner.get(from, to)
    }

    /// Outgoing probabilities of node `i`
    pub fn row(&self, i: usize) -> &[f64] {
        self.inner.row(i)
    }
}
