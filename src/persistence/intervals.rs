//! Birth-death interval extraction by homological dimension.

use ndarray::Array2;

/// One persistence-diagram entry: (dimension, (birth, death))
pub type PersistenceEntry = (usize, (f64, f64));

/// Interval pairs of a single homological dimension
///
/// Filters the diagram to entries whose dimension equals `dimension` and
/// returns their (birth, death) pairs as a `(k, 2)` array, preserving the
/// diagram's order. A dimension absent from the diagram yields a `(0, 2)`
/// array.
pub fn persistence_in_dimension(
    persistence: &[PersistenceEntry],
    dimension: usize,
) -> Array2<f64> {
    let pairs: Vec<(f64, f64)> = persistence
        .iter()
        .filter(|(dim, _)| *dim == dimension)
        .map(|(_, interval)| *interval)
        .collect();

    let mut intervals = Array2::zeros((pairs.len(), 2));
    for (row, (birth, death)) in pairs.into_iter().enumerate() {
        intervals[[row, 0]] = birth;
        intervals[[row, 1]] = death;
    }
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_extracts_matching_dimension_in_order() {
        let diagram: Vec<PersistenceEntry> = vec![
            (0, (0.0, 1.0)),
            (1, (0.5, 2.0)),
            (0, (0.2, 0.9)),
        ];

        let dim0 = persistence_in_dimension(&diagram, 0);
        assert_eq!(dim0, array![[0.0, 1.0], [0.2, 0.9]]);

        let dim1 = persistence_in_dimension(&diagram, 1);
        assert_eq!(dim1, array![[0.5, 2.0]]);
    }

    #[test]
    fn test_absent_dimension_yields_empty() {
        let diagram: Vec<PersistenceEntry> = vec![(0, (0.0, 1.0))];

        let dim2 = persistence_in_dimension(&diagram, 2);
        assert_eq!(dim2.shape(), &[0, 2]);
    }

    #[test]
    fn test_empty_diagram() {
        let dim0 = persistence_in_dimension(&[], 0);
        assert_eq!(dim0.shape(), &[0, 2]);
    }

    #[test]
    fn test_input_not_mutated_and_pure() {
        let diagram: Vec<PersistenceEntry> = vec![
            (1, (0.1, 0.4)),
            (1, (0.3, f64::INFINITY)),
        ];
        let before = diagram.clone();

        let first = persistence_in_dimension(&diagram, 1);
        let second = persistence_in_dimension(&diagram, 1);

        assert_eq!(diagram, before);
        assert_eq!(first, second);
        assert!(first[[1, 1]].is_infinite());
    }
}
