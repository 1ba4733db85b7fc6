//! Visited flags for graph traversals.
//!
//! Traversals address vertices by their position in the graph's enumeration
//! order, so a dense `Vec<bool>` sized to the vertex count is enough.

/// A dense visited set over vertex positions.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Returns `true` iff `idx` was not yet visited, and marks it visited.
    ///
    /// Out-of-range positions are never visitable.
    #[inline]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        match self.flags.get_mut(idx) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn unmark(&mut self, idx: usize) {
        if let Some(flag) = self.flags.get_mut(idx) {
            *flag = false;
        }
    }
}
