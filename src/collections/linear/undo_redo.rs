//! `UndoRedoManager` - reversible state history over two bounded stacks.
//!
//! `execute` records a new state and invalidates the redo history. `undo`
//! moves the latest state onto the redo stack; `redo` moves it back. Both
//! stacks are bounded by the configured history length.
//!
//! A full history does not reject new states the way a bounded
//! [`Stack::push`] does: `execute` goes through [`Stack::push_evicting`], so
//! the oldest recorded state is dropped (in constant time) and the newest one
//! is always kept. The bound only limits growth; nothing is reserved up front.

use super::stack::Stack;

/// Undo/redo history of `S` snapshots.
#[derive(Debug, Clone)]
pub struct UndoRedoManager<S> {
    undo_stack: Stack<S>,
    redo_stack: Stack<S>,
    max_history: usize,
}

impl<S: Clone> UndoRedoManager<S> {
    /// History length used by [`Default`].
    pub const DEFAULT_HISTORY: usize = 50;

    /// Creates a manager keeping at most `max_history` states per stack.
    pub fn new(max_history: usize) -> Self {
        Self {
            undo_stack: Stack::with_capacity(max_history),
            redo_stack: Stack::with_capacity(max_history),
            max_history,
        }
    }

    /// Returns the configured history length.
    #[inline]
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Records `state` as the newest state and clears the redo history.
    pub fn execute(&mut self, state: S) {
        if self.undo_stack.push_evicting(state).is_some() {
            trace_event!(max_history = self.max_history, "undo history full, evicted oldest state");
        }
        self.redo_stack.clear();
    }

    /// Steps back: returns the latest state and makes it redoable.
    pub fn undo(&mut self) -> Option<S> {
        let state = self.undo_stack.pop()?;
        self.redo_stack.push_evicting(state.clone());
        trace_event!(undo_len = self.undo_stack.len(), redo_len = self.redo_stack.len(), "undo");
        Some(state)
    }

    /// Steps forward: returns the latest undone state and makes it undoable again.
    pub fn redo(&mut self) -> Option<S> {
        let state = self.redo_stack.pop()?;
        self.undo_stack.push_evicting(state.clone());
        trace_event!(undo_len = self.undo_stack.len(), redo_len = self.redo_stack.len(), "redo");
        Some(state)
    }

    /// Returns `true` if there is a state to undo.
    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns `true` if there is a state to redo.
    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Returns the newest recorded state.
    #[inline]
    pub fn current_state(&self) -> Option<&S> {
        self.undo_stack.peek()
    }

    /// Number of undoable states.
    #[inline]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redoable states.
    #[inline]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forgets the entire history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<S: Clone> Default for UndoRedoManager<S> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_then_redo() {
        let mut m = UndoRedoManager::default();
        m.execute("s1");
        m.execute("s2");

        assert_eq!(m.undo(), Some("s2"));
        assert!(m.can_redo());
        assert_eq!(m.current_state(), Some(&"s1"));

        assert_eq!(m.redo(), Some("s2"));
        assert_eq!(m.current_state(), Some(&"s2"));
        assert!(!m.can_redo());
    }

    #[test]
    fn test_execute_clears_redo() {
        let mut m = UndoRedoManager::new(10);
        m.execute(1);
        m.execute(2);
        assert_eq!(m.undo(), Some(2));
        assert!(m.can_redo());
        m.execute(3);
        assert!(!m.can_redo());
        assert_eq!(m.redo(), None);
    }

    #[test]
    fn test_empty_history() {
        let mut m: UndoRedoManager<u8> = UndoRedoManager::new(3);
        assert!(!m.can_undo());
        assert_eq!(m.undo(), None);
        assert_eq!(m.redo(), None);
        assert_eq!(m.current_state(), None);
    }

    #[test]
    fn test_unbounded_history_does_not_reserve() {
        let mut m = UndoRedoManager::new(usize::MAX);
        m.execute(1u64);
        m.execute(2);
        assert_eq!(m.max_history(), usize::MAX);
        assert_eq!(m.undo(), Some(2));
        assert_eq!(m.redo(), Some(2));
        assert_eq!(m.undo_len(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut m = UndoRedoManager::new(3);
        for i in 0..5 {
            m.execute(i);
        }
        assert_eq!(m.undo_len(), 3);
        assert_eq!(m.undo(), Some(4));
        assert_eq!(m.undo(), Some(3));
        assert_eq!(m.undo(), Some(2));
        assert_eq!(m.undo(), None);
        assert_eq!(m.redo_len(), 3);
        m.clear();
        assert!(!m.can_redo());
    }
}
