//! Tests for outcome registration, deduplication and label lookup

#[cfg(test)]
mod tests {
    use sigmaspace::OutcomeSpace;

    // Tests identifiers are assigned densely in registration order
    // Verified by starting identifiers at one
    #[test]
    fn test_add_outcome_assigns_dense_ids() {
        let mut omega = OutcomeSpace::new();
        assert!(omega.is_empty());

        assert_eq!(omega.add_outcome("heads"), 0);
        assert_eq!(omega.add_outcome("tails"), 1);
        assert_eq!(omega.add_outcome("edge"), 2);
        assert_eq!(omega.len(), 3);
        assert_eq!(omega.ids(), 0..3);
    }

    // Tests re-adding a label returns its original identifier without growing the space
    // Verified by removing the index lookup from add_outcome
    #[test]
    fn test_duplicate_label_returns_existing_id() {
        let mut omega = OutcomeSpace::new();
        let first = omega.add_outcome("a");
        omega.add_outcome("b");

        assert_eq!(omega.add_outcome("a"), first);
        assert_eq!(omega.len(), 2);
    }

    // Tests lookups in both directions, including unknown labels and ids
    #[test]
    fn test_label_and_id_lookup() {
        let omega = OutcomeSpace::from_labels(["x", "y", "x", "z"]);

        assert_eq!(omega.len(), 3);
        assert_eq!(omega.label(1), Some("y"));
        assert_eq!(omega.label(3), None);
        assert_eq!(omega.id_of("z"), Some(2));
        assert_eq!(omega.id_of("w"), None);
        assert_eq!(omega.labels().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }
}
