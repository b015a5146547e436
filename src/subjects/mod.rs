//! Subject Identifiers
//!
//! The study enrolls subjects numbered 2 through 57, identified in the
//! data files by zero-padded labels (`s002`, `s003`, ...). A handful of
//! subjects were excluded from analysis after collection; their numbers
//! stay reserved so labels remain stable, but no label is generated for
//! them.

mod labels;

pub use labels::{
    all_subject_labels,
    is_excluded,
    subject_labels_in_range,
    EXCLUDED_SUBJECTS,
    SUBJECT_MAX,
    SUBJECT_MIN,
    SUBJECT_PREFIX,
};
