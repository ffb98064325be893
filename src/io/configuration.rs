//! Numerical constants and runtime configuration defaults

// Tolerances
/// Slack allowed when checking that weights are non-negative and sum to one
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

// Enumeration is exponential in the atom count and indexed by a u64 bitmask
/// Largest number of atoms a generated sigma-algebra may be built from
pub const MAX_GENERATED_ATOMS: usize = 62;

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default number of outcomes drawn by the sampling command
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

// Command-line list syntax
/// Separator between items of a list argument
pub const LIST_SEPARATOR: char = ',';
