use crate::space::outcome::OutcomeId;
use bitvec::prelude::*;
use std::fmt;

/// Immutable subset of an outcome space stored as a membership mask
///
/// Bit `i` records whether outcome `i` belongs to the event. The mask length
/// is the size of the space the event was built against; two events of
/// different lengths are never equal, even when their common prefix agrees.
/// Binary operations on events of different lengths only look at the shorter
/// length and return an event of that length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    mask: BitVec,
}

impl Event {
    /// Wrap an existing membership mask
    pub const fn new(mask: BitVec) -> Self {
        Self { mask }
    }

    /// Event containing no outcomes of an `n`-outcome space
    pub fn empty(n: usize) -> Self {
        Self {
            mask: bitvec![0; n],
        }
    }

    /// Event containing every outcome of an `n`-outcome space
    pub fn full(n: usize) -> Self {
        Self {
            mask: bitvec![1; n],
        }
    }

    /// Event over an `n`-outcome space holding the listed outcomes
    ///
    /// Identifiers at or beyond `n` are ignored.
    pub fn from_outcomes(n: usize, ids: impl IntoIterator<Item = OutcomeId>) -> Self {
        let mut mask = bitvec![0; n];
        for id in ids {
            if id < n {
                mask.set(id, true);
            }
        }
        Self { mask }
    }

    /// Length of the mask, i.e. the size of the space it was built against
    pub fn size(&self) -> usize {
        self.mask.len()
    }

    /// Test outcome membership; false for identifiers past the mask
    pub fn contains(&self, id: OutcomeId) -> bool {
        self.mask.get(id).as_deref() == Some(&true)
    }

    /// Borrow the membership mask
    pub fn mask(&self) -> &BitSlice {
        &self.mask
    }

    /// Number of outcomes in the event
    pub fn count(&self) -> usize {
        self.mask.count_ones()
    }

    /// Test if the event holds no outcomes
    pub fn is_empty(&self) -> bool {
        self.mask.not_any()
    }

    /// Test if the event holds every outcome of its mask
    pub fn is_full(&self) -> bool {
        self.mask.all()
    }

    /// Identifiers of contained outcomes in ascending order
    pub fn outcomes(&self) -> impl Iterator<Item = OutcomeId> + '_ {
        self.mask.iter_ones()
    }

    /// Test if every outcome of `self` is also in `other`
    ///
    /// Outcomes past the end of `other` count as absent from it.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.outcomes().all(|id| other.contains(id))
    }

    /// Pointwise negation over the same length
    #[must_use]
    pub fn complement(event: &Self) -> Self {
        Self {
            mask: event.mask.iter().by_vals().map(|bit| !bit).collect(),
        }
    }

    /// Pointwise OR over the shorter of the two lengths
    #[must_use]
    pub fn unite(a: &Self, b: &Self) -> Self {
        Self::combine(a, b, |x, y| x | y)
    }

    /// Pointwise AND over the shorter of the two lengths
    #[must_use]
    pub fn intersect(a: &Self, b: &Self) -> Self {
        Self::combine(a, b, |x, y| x & y)
    }

    /// Outcomes of `a` not in `b`, over the shorter of the two lengths
    #[must_use]
    pub fn difference(a: &Self, b: &Self) -> Self {
        Self::combine(a, b, |x, y| x & !y)
    }

    // Zipping the two masks truncates to the shorter one
    fn combine(a: &Self, b: &Self, op: impl Fn(bool, bool) -> bool) -> Self {
        let mask = a
            .mask
            .iter()
            .by_vals()
            .zip(b.mask.iter().by_vals())
            .map(|(x, y)| op(x, y))
            .collect();
        Self { mask }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (position, id) in self.outcomes().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "}}")
    }
}
