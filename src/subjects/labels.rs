//! Zero-padded subject label generation.

use crate::error::{PrepError, Result};

/// Prefix of every subject label
pub const SUBJECT_PREFIX: &str = "s";

/// Lowest enrolled subject number
pub const SUBJECT_MIN: u32 = 2;

/// Highest enrolled subject number
pub const SUBJECT_MAX: u32 = 57;

/// Subjects excluded from analysis; no labels are generated for these
pub const EXCLUDED_SUBJECTS: [u32; 5] = [6, 9, 14, 23, 45];

/// Is this subject number in the exclusion set?
pub fn is_excluded(subject: u32) -> bool {
    EXCLUDED_SUBJECTS.contains(&subject)
}

/// Labels for the subjects numbered `start` through `stop`, inclusive
///
/// Produces one label per non-excluded subject number, in ascending
/// order, each formatted as the prefix followed by the number zero-padded
/// to 3 digits (7 becomes `s007`).
///
/// # Errors
///
/// `InvalidRange` unless `SUBJECT_MIN <= start <= stop <= SUBJECT_MAX`.
pub fn subject_labels_in_range(start: u32, stop: u32) -> Result<Vec<String>> {
    if start < SUBJECT_MIN || stop > SUBJECT_MAX || start > stop {
        return Err(PrepError::InvalidRange { start, stop });
    }

    Ok((start..=stop)
        .filter(|i| !is_excluded(*i))
        .map(|i| format!("{SUBJECT_PREFIX}{i:03}"))
        .collect())
}

/// Labels for the full study roster
pub fn all_subject_labels() -> Vec<String> {
    // The full range is valid by construction
    subject_labels_in_range(SUBJECT_MIN, SUBJECT_MAX).unwrap_or_default()
}
