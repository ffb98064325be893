//! Outcome spaces and the events observed on them

/// Membership-mask events and their set operations
pub mod event;
/// Registry of outcome labels and their dense identifiers
pub mod outcome;

pub use event::Event;
pub use outcome::{OutcomeId, OutcomeSpace};
