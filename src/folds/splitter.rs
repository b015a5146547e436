//! Shuffle-and-partition of per-subject sample arrays.

use log::debug;
use ndarray::{s, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{PrepError, Result};

/// Splits per-subject data into equal-sized labeled folds
///
/// Configuration (`shuffle`, `n_splits`) is fixed at construction; only
/// the owned generator's state advances across `split` calls, so a
/// second shuffled split of the same data yields different permutations.
/// Two splitters constructed with the same seed produce identical
/// output on identical input.
#[derive(Debug)]
pub struct FoldSplitter {
    rng: StdRng,
    shuffle: bool,
    n_splits: usize,
}

impl FoldSplitter {
    /// Create a splitter
    ///
    /// # Arguments
    /// * `shuffle` - Permute each group's rows before partitioning
    /// * `seed` - Seed the generator for reproducible shuffles; `None`
    ///   draws from OS entropy
    /// * `n_splits` - Number of folds per group, at least 1
    pub fn new(shuffle: bool, seed: Option<u64>, n_splits: usize) -> Self {
        assert!(n_splits >= 1, "n_splits must be at least 1");

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        Self { rng, shuffle, n_splits }
    }

    /// Partition each group's rows into `n_splits` contiguous folds
    ///
    /// For each (data, label) pair in input order, the rows are permuted
    /// (if shuffling is enabled) and cut into `n_splits` equal chunks
    /// along the first axis; each chunk is appended to the output data
    /// together with one copy of the group's label. Both outputs have
    /// length `n_splits * grouped_data.len()`. Input arrays are never
    /// modified; permutation produces a new array.
    ///
    /// # Errors
    /// * `LengthMismatch` if `grouped_data` and `labels` differ in length
    /// * `SizeMismatch` if any group's row count is not divisible by
    ///   `n_splits` (no partial results are returned)
    pub fn split(
        &mut self,
        grouped_data: &[Array2<f64>],
        labels: &[String],
    ) -> Result<(Vec<Array2<f64>>, Vec<String>)> {
        if grouped_data.len() != labels.len() {
            return Err(PrepError::LengthMismatch {
                data_len: grouped_data.len(),
                labels_len: labels.len(),
            });
        }

        debug!(
            "splitting {} groups into {} folds each (shuffle: {})",
            grouped_data.len(),
            self.n_splits,
            self.shuffle
        );

        let mut fold_data = Vec::with_capacity(self.n_splits * grouped_data.len());
        let mut fold_labels = Vec::with_capacity(self.n_splits * labels.len());

        for (data, label) in grouped_data.iter().zip(labels) {
            let rows = data.nrows();
            if rows % self.n_splits != 0 {
                return Err(PrepError::SizeMismatch {
                    rows,
                    n_splits: self.n_splits,
                });
            }
            let rows_per_fold = rows / self.n_splits;

            let permuted = if self.shuffle {
                let mut order: Vec<usize> = (0..rows).collect();
                order.shuffle(&mut self.rng);
                data.select(Axis(0), &order)
            } else {
                data.clone()
            };

            for k in 0..self.n_splits {
                let fold = permuted
                    .slice(s![k * rows_per_fold..(k + 1) * rows_per_fold, ..])
                    .to_owned();
                fold_data.push(fold);
                fold_labels.push(label.clone());
            }
        }

        Ok((fold_data, fold_labels))
    }

    /// Number of folds each group is cut into
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Does this splitter permute rows before partitioning?
    pub fn shuffles(&self) -> bool {
        self.shuffle
    }
}
