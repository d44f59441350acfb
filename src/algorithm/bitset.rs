use bitvec::prelude::*;

/// Fixed-size set of board line indices (rows or columns)
///
/// Uses 0-based indexing matching board coordinates. Indices outside the
/// capacity are never inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSet {
    bits: BitVec,
}

impl LineSet {
    /// Create an empty set able to hold indices below `capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Insert a line index, reporting whether it was newly added
    pub fn insert(&mut self, line: usize) -> bool {
        match self.bits.get_mut(line) {
            Some(mut bit) if !*bit => {
                *bit = true;
                true
            }
            _ => false,
        }
    }
}
