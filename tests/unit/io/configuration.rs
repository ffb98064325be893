//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use sigmaspace::io::configuration::{
        DEFAULT_SAMPLE_COUNT, DEFAULT_SEED, DEFAULT_TOLERANCE, LIST_SEPARATOR, MAX_GENERATED_ATOMS,
    };

    // Tests the atom ceiling keeps every subset index inside a u64
    // Verified by raising the ceiling to 64
    #[test]
    fn test_atom_ceiling() {
        assert_eq!(MAX_GENERATED_ATOMS, 62);
        assert_eq!(1_u64 << MAX_GENERATED_ATOMS, 4_611_686_018_427_387_904);
    }

    // Tests the default tolerance is small but positive
    #[test]
    fn test_default_tolerance() {
        assert!(DEFAULT_TOLERANCE > 0.0);
        assert!(DEFAULT_TOLERANCE < 1e-6);
    }

    // Tests command-line defaults
    // Verified by changing constant values
    #[test]
    fn test_cli_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_SAMPLE_COUNT, 1000);
        assert_eq!(LIST_SEPARATOR, ',');
    }
}
