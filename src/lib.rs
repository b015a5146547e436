//! # typing-tda-prep
//!
//! Data-preparation helpers for a topological-data-analysis study of
//! typing behavior.
//!
//! ## Workflow
//!
//! Keystroke time series are collected per subject, summarized by an
//! external persistent-homology engine, and fed to downstream
//! cross-validation-style analysis. This crate covers the glue between
//! those stages:
//!
//! 1. **Subject labels**: zero-padded identifiers (`s002`..`s057`) for the
//!    study roster, skipping subjects excluded from analysis.
//!
//! 2. **Persistence extraction**: pulling the (birth, death) interval
//!    pairs of a single homological dimension out of a persistence
//!    diagram, as a `(k, 2)` float array.
//!
//! 3. **Fold splitting**: shuffling and partitioning each subject's
//!    samples into equal-sized labeled folds.
//!
//! The three components are independent; none calls another. The diagram
//! computation itself and all file handling live outside this crate.

pub mod error;
pub mod folds;
pub mod persistence;
pub mod subjects;

// Re-exports from subjects
pub use subjects::{
    all_subject_labels,
    is_excluded,
    subject_labels_in_range,
    EXCLUDED_SUBJECTS,
    SUBJECT_MAX,
    SUBJECT_MIN,
    SUBJECT_PREFIX,
};

// Re-exports from persistence
pub use persistence::{persistence_in_dimension, PersistenceEntry};

// Re-exports from folds
pub use folds::FoldSplitter;

// Re-exports from error
pub use error::{PrepError, Result};
