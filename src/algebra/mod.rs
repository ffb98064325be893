//! Sigma-algebras and their generation from seed events

/// Signatures and the atom partition induced by generators
pub mod atoms;
/// Axiom checks and minimal sigma-algebra generation
pub mod sigma;

pub use sigma::{AxiomViolation, SigmaAlgebra};
