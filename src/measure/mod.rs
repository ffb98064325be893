//! Measures and random variables on finite outcome spaces

/// Atomic weights, event probabilities and sampling
pub mod probability;
/// Real-valued random variables and their moments
pub mod variable;

pub use probability::ProbabilityMeasure;
pub use variable::DiscreteRandomVariable;
