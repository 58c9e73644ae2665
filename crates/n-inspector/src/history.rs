//! Undo/redo history — snapshot-based class-list tracking.
//!
//! Every change to the class list records the list as it was *before* the
//! change. Undo swaps the current list for the last recorded one; redo
//! swaps it back.
//!
//! # Usage
//!
//! ```text
//! let before = list.clone();
//! list.toggle("p-4");
//! history.record(before);
//! // later:
//! if let Some(prev) = history.undo(&list) { list = prev; }
//! ```
//!
//! Recording a change clears the redo stack (branching history is not
//! supported). Recording a snapshot equal to the top of the undo stack is
//! ignored, so no-op edits don't clutter it.

use crate::class_list::ClassList;

/// Undo/redo stacks of class-list snapshots.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<ClassList>,
    redo_stack: Vec<ClassList>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Record `before`, the list as it was before a change.
    pub fn record(&mut self, before: ClassList) {
        if self.undo_stack.last() == Some(&before) {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push(before);
    }

    /// Step back. `current` is the list as it is now; it becomes redoable.
    /// Returns the list to restore, or `None` if there's nothing to undo.
    pub fn undo(&mut self, current: &ClassList) -> Option<ClassList> {
        let prev = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(prev)
    }

    /// Step forward again after an undo. Returns the list to restore, or
    /// `None` if there's nothing to redo.
    pub fn redo(&mut self, current: &ClassList) -> Option<ClassList> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(next)
    }

    /// Whether there is anything to undo.
    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is anything to redo.
    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Forget everything (a different element was selected).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
