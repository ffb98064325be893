//! Atomic decomposition of an outcome space by a family of generator events

use crate::space::event::Event;
use crate::space::outcome::OutcomeId;
use bitvec::prelude::*;
use std::collections::HashMap;

/// Membership pattern of one outcome across a generator family
///
/// Bit `k` is set when generator `k` contains the outcome.
pub fn signature(id: OutcomeId, generators: &[Event]) -> BitVec {
    generators
        .iter()
        .map(|generator| generator.contains(id))
        .collect()
}

/// Partition of an outcome space into blocks no generator can split
///
/// Atoms are numbered by the smallest outcome they contain, so the numbering
/// depends only on the generators and never on hashing order.
#[derive(Clone, Debug)]
pub struct AtomPartition {
    atoms: Vec<Event>,
}

impl AtomPartition {
    /// Group the outcomes `0..n` by their signature under `generators`
    pub fn new(n: usize, generators: &[Event]) -> Self {
        let mut slots: HashMap<BitVec, usize> = HashMap::new();
        let mut masks: Vec<BitVec> = Vec::new();

        for id in 0..n {
            let slot = *slots.entry(signature(id, generators)).or_insert_with(|| {
                masks.push(bitvec![0; n]);
                masks.len() - 1
            });
            if let Some(mask) = masks.get_mut(slot) {
                mask.set(id, true);
            }
        }

        Self {
            atoms: masks.into_iter().map(Event::new).collect(),
        }
    }

    /// Number of atoms
    pub const fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Test if the partition has no atoms, which happens only for an empty space
    pub const fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Atoms in numbering order
    pub fn atoms(&self) -> &[Event] {
        &self.atoms
    }

    /// Union of the atoms whose numbers are set in `selection`
    ///
    /// Bit `i` of `selection` selects atom `i`; bits at or beyond
    /// [`AtomPartition::len`] are ignored.
    pub fn union_of(&self, selection: u64, n: usize) -> Event {
        let mut mask = bitvec![0; n];
        for (index, atom) in self.atoms.iter().enumerate().take(64) {
            if selection & (1_u64 << index) != 0 {
                mask |= atom.mask();
            }
        }
        Event::new(mask)
    }
}
