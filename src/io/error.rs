//! Error types for probability space operations

use std::fmt;

/// Main error type for all probability space operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbabilityError {
    /// Outcome identifier lies outside the space a structure was built over
    OutcomeOutOfRange {
        /// The rejected outcome identifier
        id: usize,
        /// Number of outcomes in the captured space
        space_size: usize,
    },

    /// Generators split the space into too many atoms to enumerate
    ///
    /// Generation enumerates every subset of the atoms, so the work grows as
    /// `2^atoms` and is refused past a fixed ceiling.
    TooManyAtoms {
        /// Number of atoms induced by the generators
        atoms: usize,
        /// Largest atom count generation accepts
        limit: usize,
    },

    /// Random variable has no value for some outcomes of its space
    PartialCoverage {
        /// Number of outcomes carrying a value
        defined: usize,
        /// Number of outcomes in the space
        space_size: usize,
    },

    /// Outcome label is not registered in the space
    UnknownOutcome {
        /// The label that failed to resolve
        label: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for ProbabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutcomeOutOfRange { id, space_size } => {
                write!(
                    f,
                    "Outcome id {id} is outside the outcome space (size {space_size})"
                )
            }
            Self::TooManyAtoms { atoms, limit } => {
                write!(
                    f,
                    "Generators induce {atoms} atoms, more than the {limit} that can be enumerated"
                )
            }
            Self::PartialCoverage {
                defined,
                space_size,
            } => {
                write!(
                    f,
                    "Random variable defines {defined} of {space_size} outcome values"
                )
            }
            Self::UnknownOutcome { label } => {
                write!(f, "Unknown outcome label '{label}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ProbabilityError {}

/// Convenience type alias for probability space results
pub type Result<T> = std::result::Result<T, ProbabilityError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ProbabilityError {
    ProbabilityError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
