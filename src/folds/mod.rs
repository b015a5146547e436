//! Fold Splitting
//!
//! Downstream analysis consumes each subject's samples as N equal-sized,
//! label-preserving partitions ("folds"). The splitter owns a random
//! generator so that fold assignment can be shuffled, reproducibly when
//! seeded, while leaving the caller's arrays untouched.

mod splitter;

pub use splitter::FoldSplitter;
