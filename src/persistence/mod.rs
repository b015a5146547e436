//! Persistence Diagram Extraction
//!
//! A persistence diagram summarizes the topological features of a
//! simplicial complex as (dimension, (birth, death)) entries: a feature
//! of the given homological dimension appears at filtration value
//! `birth` and disappears at `death`.
//!
//! The diagram itself is produced by an external persistent-homology
//! engine and passed in read-only. This module only reshapes it: the
//! downstream analysis consumes one dimension at a time as a `(k, 2)`
//! float array of interval pairs.

mod intervals;

pub use intervals::{persistence_in_dimension, PersistenceEntry};
