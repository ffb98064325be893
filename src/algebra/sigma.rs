//! Sigma-algebras over finite outcome spaces: axiom checks and generation

use crate::algebra::atoms::AtomPartition;
use crate::io::configuration::MAX_GENERATED_ATOMS;
use crate::io::error::{ProbabilityError, Result};
use crate::space::event::Event;
use crate::space::outcome::OutcomeSpace;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};

/// First sigma-algebra axiom a family of events was found to break
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxiomViolation {
    /// A member was built against a space of a different size
    SizeMismatch {
        /// Length of the offending member
        event_size: usize,
        /// Size of the outcome space
        space_size: usize,
    },
    /// The empty event is not a member
    MissingEmpty,
    /// The full event is not a member
    MissingFull,
    /// A member's complement is not a member
    MissingComplement {
        /// Member whose complement is absent
        event: Event,
    },
    /// The union of two members is not a member
    MissingUnion {
        /// First operand
        left: Event,
        /// Second operand
        right: Event,
    },
}

impl fmt::Display for AxiomViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                event_size,
                space_size,
            } => write!(
                f,
                "event of size {event_size} does not match space of size {space_size}"
            ),
            Self::MissingEmpty => write!(f, "empty event is missing"),
            Self::MissingFull => write!(f, "full event is missing"),
            Self::MissingComplement { event } => {
                write!(f, "complement of {event} is missing")
            }
            Self::MissingUnion { left, right } => {
                write!(f, "union of {left} and {right} is missing")
            }
        }
    }
}

/// Family of events over one outcome space
///
/// Members are unique by mask; building a family drops repeated masks and
/// keeps first occurrences in order. Nothing else is added, so a family is
/// only a sigma-algebra if [`SigmaAlgebra::is_sigma_algebra`] says so.
/// [`SigmaAlgebra::generate`] builds families that always are.
#[derive(Clone, Debug)]
pub struct SigmaAlgebra<'a> {
    omega: &'a OutcomeSpace,
    events: Vec<Event>,
}

impl<'a> SigmaAlgebra<'a> {
    /// Create a family from events, collapsing duplicate masks
    pub fn new(omega: &'a OutcomeSpace, events: Vec<Event>) -> Self {
        Self {
            omega,
            events: deduplicate(events),
        }
    }

    /// Space the family lives on
    pub const fn outcome_space(&self) -> &'a OutcomeSpace {
        self.omega
    }

    /// Members in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of members
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Test if the family has no members
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Test membership by mask equality
    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }

    /// Test the sigma-algebra axioms
    pub fn is_sigma_algebra(&self) -> bool {
        self.check().is_none()
    }

    /// Find the first violated axiom, if any
    ///
    /// Checks run in order: member sizes, presence of the empty and full
    /// events, closure under complement, then closure under every ordered
    /// pairwise union.
    pub fn check(&self) -> Option<AxiomViolation> {
        let violation = self.find_violation();
        if let Some(ref violation) = violation {
            debug!(%violation, "family is not a sigma-algebra");
        }
        violation
    }

    fn find_violation(&self) -> Option<AxiomViolation> {
        let n = self.omega.len();

        if let Some(event) = self.events.iter().find(|event| event.size() != n) {
            return Some(AxiomViolation::SizeMismatch {
                event_size: event.size(),
                space_size: n,
            });
        }

        let members: HashSet<&Event> = self.events.iter().collect();

        if !members.contains(&Event::empty(n)) {
            return Some(AxiomViolation::MissingEmpty);
        }
        if !members.contains(&Event::full(n)) {
            return Some(AxiomViolation::MissingFull);
        }

        for event in &self.events {
            if !members.contains(&Event::complement(event)) {
                return Some(AxiomViolation::MissingComplement {
                    event: event.clone(),
                });
            }
        }

        for left in &self.events {
            for right in &self.events {
                if !members.contains(&Event::unite(left, right)) {
                    return Some(AxiomViolation::MissingUnion {
                        left: left.clone(),
                        right: right.clone(),
                    });
                }
            }
        }

        None
    }

    /// Minimal non-empty members
    ///
    /// A member is an atom when no other non-empty member lies strictly
    /// inside it. For a generated algebra these are exactly the blocks of
    /// outcomes the generators cannot tell apart.
    pub fn atoms(&self) -> Vec<Event> {
        self.events
            .iter()
            .filter(|candidate| !candidate.is_empty())
            .filter(|candidate| {
                !self.events.iter().any(|other| {
                    !other.is_empty() && other != *candidate && other.is_subset_of(candidate)
                })
            })
            .cloned()
            .collect()
    }

    /// Build the smallest sigma-algebra containing every generator
    ///
    /// Outcomes are grouped into atoms by which generators contain them and
    /// the result holds every union of atoms, so it has exactly `2^m`
    /// members for `m` atoms. Generators should be built against the current
    /// size of `omega`; membership past a generator's end reads as absent.
    ///
    /// # Errors
    ///
    /// Returns `TooManyAtoms` if the generators induce more than
    /// [`MAX_GENERATED_ATOMS`] atoms
    pub fn generate(omega: &'a OutcomeSpace, generators: &[Event]) -> Result<Self> {
        let n = omega.len();

        if generators.is_empty() {
            return Ok(Self::new(omega, vec![Event::empty(n), Event::full(n)]));
        }

        let partition = AtomPartition::new(n, generators);
        let m = partition.len();
        debug!(
            outcomes = n,
            generators = generators.len(),
            atoms = m,
            "partitioned outcome space"
        );

        if m > MAX_GENERATED_ATOMS {
            return Err(ProbabilityError::TooManyAtoms {
                atoms: m,
                limit: MAX_GENERATED_ATOMS,
            });
        }

        let total = 1_u64 << m;
        trace!(total, "enumerating unions of atoms");
        let events = (0..total)
            .map(|selection| partition.union_of(selection, n))
            .collect();

        Ok(Self::new(omega, events))
    }
}

fn deduplicate(events: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::with_capacity(events.len());
    events
        .into_iter()
        .filter(|event| seen.insert(event.clone()))
        .collect()
}
