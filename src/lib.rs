//! Finite probability spaces in the measure-theoretic sense
//!
//! Outcomes are registered in an [`OutcomeSpace`], events are subsets of it,
//! a [`ProbabilityMeasure`] weighs the outcomes and a
//! [`DiscreteRandomVariable`] maps them to reals. [`SigmaAlgebra`] checks the
//! sigma-algebra axioms on a family of events and generates the smallest
//! sigma-algebra containing a set of seed events.

#![forbid(unsafe_code)]

/// Sigma-algebra validation and generation
pub mod algebra;
/// Command-line host, configuration and error handling
pub mod io;
/// Probability measures and random variables
pub mod measure;
/// Outcome spaces and events
pub mod space;

pub use algebra::{AxiomViolation, SigmaAlgebra};
pub use io::error::{ProbabilityError, Result};
pub use measure::{DiscreteRandomVariable, ProbabilityMeasure};
pub use space::{Event, OutcomeId, OutcomeSpace};
