//! Tests for sigma-algebra axiom checks and generation

#[cfg(test)]
mod tests {
    use sigmaspace::algebra::AxiomViolation;
    use sigmaspace::io::configuration::MAX_GENERATED_ATOMS;
    use sigmaspace::{Event, OutcomeSpace, ProbabilityError, SigmaAlgebra};

    fn three_outcomes() -> OutcomeSpace {
        OutcomeSpace::from_labels(["1", "2", "3"])
    }

    // Tests the trivial family is a sigma-algebra
    #[test]
    fn test_trivial_family() {
        let omega = three_outcomes();
        let family = SigmaAlgebra::new(&omega, vec![Event::empty(3), Event::full(3)]);

        assert!(family.is_sigma_algebra());
        assert_eq!(family.check(), None);
    }

    // Tests construction collapses repeated masks keeping first occurrences
    #[test]
    fn test_new_deduplicates() {
        let omega = three_outcomes();
        let a = Event::from_outcomes(3, [0]);
        let family = SigmaAlgebra::new(
            &omega,
            vec![Event::empty(3), a.clone(), Event::empty(3), a.clone()],
        );

        assert_eq!(family.len(), 2);
        assert_eq!(family.events(), &[Event::empty(3), a]);
    }

    // Tests a member of the wrong size fails before anything else
    #[test]
    fn test_size_mismatch() {
        let omega = three_outcomes();
        let family = SigmaAlgebra::new(
            &omega,
            vec![Event::empty(3), Event::full(3), Event::full(2)],
        );

        assert_eq!(
            family.check(),
            Some(AxiomViolation::SizeMismatch {
                event_size: 2,
                space_size: 3
            })
        );
    }

    // Tests missing empty or full events are reported
    // Verified by deriving the empty event from the full event's complement
    #[test]
    fn test_missing_empty_and_full() {
        let omega = three_outcomes();

        let without_empty = SigmaAlgebra::new(&omega, vec![Event::full(3)]);
        assert_eq!(without_empty.check(), Some(AxiomViolation::MissingEmpty));

        let without_full = SigmaAlgebra::new(&omega, vec![Event::empty(3)]);
        assert_eq!(without_full.check(), Some(AxiomViolation::MissingFull));
    }

    // Tests a family without a complement fails
    // Verified by skipping the complement clause
    #[test]
    fn test_missing_complement() {
        let omega = three_outcomes();
        let a = Event::from_outcomes(3, [0, 2]);
        let family = SigmaAlgebra::new(&omega, vec![Event::empty(3), Event::full(3), a.clone()]);

        assert!(!family.is_sigma_algebra());
        assert_eq!(family.check(), Some(AxiomViolation::MissingComplement { event: a }));
    }

    // Tests a family closed under complement but not union fails
    // Verified by skipping the union clause
    #[test]
    fn test_missing_union() {
        let omega = three_outcomes();
        let a = Event::from_outcomes(3, [0]);
        let b = Event::from_outcomes(3, [1]);
        let family = SigmaAlgebra::new(
            &omega,
            vec![
                Event::empty(3),
                Event::full(3),
                a.clone(),
                Event::complement(&a),
                b.clone(),
                Event::complement(&b),
            ],
        );

        assert!(!family.is_sigma_algebra());
        assert!(matches!(family.check(), Some(AxiomViolation::MissingUnion { .. })));
    }

    // Tests generation without generators yields the trivial algebra
    #[test]
    fn test_generate_without_generators() {
        let omega = three_outcomes();
        let Ok(algebra) = SigmaAlgebra::generate(&omega, &[]) else {
            unreachable!("trivial algebra always fits");
        };

        assert_eq!(algebra.events(), &[Event::empty(3), Event::full(3)]);
        assert!(algebra.is_sigma_algebra());
    }

    // Tests a single proper generator yields its four-event algebra
    // Verified by omitting complements of atoms from the enumeration
    #[test]
    fn test_generate_single_generator() {
        let omega = three_outcomes();
        let a = Event::from_outcomes(3, [0, 2]);
        let Ok(algebra) = SigmaAlgebra::generate(&omega, std::slice::from_ref(&a)) else {
            unreachable!("two atoms are enumerable");
        };

        assert_eq!(algebra.len(), 4);
        assert!(algebra.is_sigma_algebra());
        assert!(algebra.contains(&Event::empty(3)));
        assert!(algebra.contains(&a));
        assert!(algebra.contains(&Event::complement(&a)));
        assert!(algebra.contains(&Event::full(3)));
    }

    // Tests the generated algebra on a singleton partition is the power set
    #[test]
    fn test_generate_power_set() {
        let omega = OutcomeSpace::from_labels(["a", "b", "c", "d"]);
        let generators = [Event::from_outcomes(4, [0, 1]), Event::from_outcomes(4, [1, 2])];
        let Ok(algebra) = SigmaAlgebra::generate(&omega, &generators) else {
            unreachable!("four atoms are enumerable");
        };

        assert_eq!(algebra.len(), 16);
        assert!(algebra.is_sigma_algebra());
        assert_eq!(algebra.atoms().len(), 4);
    }

    // Tests atoms of a generated algebra match the generator partition
    #[test]
    fn test_atoms_of_generated_algebra() {
        let omega = OutcomeSpace::from_labels(["a", "b", "c", "d", "e"]);
        let Ok(algebra) = SigmaAlgebra::generate(&omega, &[Event::from_outcomes(5, [1, 3])]) else {
            unreachable!("two atoms are enumerable");
        };

        assert_eq!(
            algebra.atoms(),
            vec![Event::from_outcomes(5, [0, 2, 4]), Event::from_outcomes(5, [1, 3])]
        );
    }

    // Tests generation refuses partitions past the atom ceiling
    // Verified by comparing against the ceiling with greater-or-equal
    #[test]
    fn test_generate_too_many_atoms() {
        let n = MAX_GENERATED_ATOMS + 1;
        let omega = OutcomeSpace::from_labels((0..n).map(|id| id.to_string()));
        let generators: Vec<Event> = (0..n).map(|id| Event::from_outcomes(n, [id])).collect();

        let result = SigmaAlgebra::generate(&omega, &generators);
        assert_eq!(
            result.err(),
            Some(ProbabilityError::TooManyAtoms {
                atoms: n,
                limit: MAX_GENERATED_ATOMS
            })
        );
    }
}
