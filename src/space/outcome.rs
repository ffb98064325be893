use std::collections::HashMap;
use std::ops::Range;

/// Dense identifier of an outcome: its position in registration order
pub type OutcomeId = usize;

/// Registry of labelled outcomes forming a finite sample space
///
/// Identifiers are contiguous from zero and never change once assigned.
/// The space only grows; registering a label that is already present
/// returns the identifier it was first given.
#[derive(Clone, Debug, Default)]
pub struct OutcomeSpace {
    labels: Vec<String>,
    index: HashMap<String, OutcomeId>,
}

impl OutcomeSpace {
    /// Create a space with no outcomes
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a space from labels in order, collapsing repeated labels
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut space = Self::new();
        for label in labels {
            space.add_outcome(label);
        }
        space
    }

    /// Register an outcome and return its identifier
    pub fn add_outcome(&mut self, label: impl Into<String>) -> OutcomeId {
        let label = label.into();
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        id
    }

    /// Number of registered outcomes
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    /// Test if no outcomes are registered
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label registered under `id`
    pub fn label(&self, id: OutcomeId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Identifier registered for `label`
    pub fn id_of(&self, label: &str) -> Option<OutcomeId> {
        self.index.get(label).copied()
    }

    /// All labels in identifier order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// All identifiers currently in the space
    pub const fn ids(&self) -> Range<OutcomeId> {
        0..self.labels.len()
    }
}
