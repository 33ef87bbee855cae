//! History - generic bounded undo/redo container
//!
//! Tracks a current value of any `Clone` type alongside an ordered list of
//! snapshots. Snapshots are full deep copies (Rust value semantics), so a
//! stored state can never be corrupted by later mutation of the live value.
//! Both the page editor and the template designer own an independent
//! instance of this container; instances are never shared.
//!
//! Two write paths exist on purpose: `set` commits a discrete edit as one
//! undoable step, while `replace` updates the current value without touching
//! the snapshot list - the path for high-frequency intermediate updates such
//! as every pointer-move of a drag. A drag ends with a single `commit`,
//! folding the whole gesture into one undoable step.

/// Default number of retained snapshots
pub const DEFAULT_CAPACITY: usize = 20;

/// Bounded snapshot history over a value of type `T`.
///
/// Invariant: the snapshot list is never empty and `index` always points at
/// a valid entry. All boundary operations (`undo` at the oldest snapshot,
/// `redo` at the newest) are silent no-ops; callers gate UI affordances on
/// [`can_undo`](History::can_undo) / [`can_redo`](History::can_redo).
#[derive(Debug, Clone)]
pub struct History<T: Clone> {
    current: T,
    snapshots: Vec<T>,
    index: usize,
    max_len: usize,
}

impl<T: Clone> History<T> {
    /// Create a history seeded with `initial` and the default snapshot cap
    pub fn new(initial: T) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    /// Create a history with a custom snapshot cap (at least 1)
    pub fn with_capacity(initial: T, max_len: usize) -> Self {
        Self {
            current: initial.clone(),
            snapshots: vec![initial],
            index: 0,
            max_len: max_len.max(1),
        }
    }

    /// The live value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Adopt `value` as current and record it as a new undoable step.
    ///
    /// Any redo branch beyond the current index is discarded; the oldest
    /// snapshot is evicted once the cap is exceeded.
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.record_current();
    }

    /// Adopt `value` as current without recording a snapshot. Used for
    /// intermediate updates (every pointer-move during a drag) where
    /// recording each frame would flood the history.
    pub fn replace(&mut self, value: T) {
        self.current = value;
    }

    /// Record the current value as a new undoable step. Called once at the
    /// end of a `replace` sequence (pointer-up after a drag).
    pub fn commit(&mut self) {
        self.record_current();
    }

    /// Step back one snapshot. No-op at the oldest retained snapshot.
    pub fn undo(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.current = self.snapshots[self.index].clone();
        }
    }

    /// Step forward one snapshot. No-op at the newest snapshot.
    pub fn redo(&mut self) {
        if self.index + 1 < self.snapshots.len() {
            self.index += 1;
            self.current = self.snapshots[self.index].clone();
        }
    }

    /// Whether `undo` would change state
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether `redo` would change state
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Number of retained snapshots
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    fn record_current(&mut self) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(self.current.clone());
        if self.snapshots.len() > self.max_len {
            self.snapshots.remove(0);
        }
        self.index = self.snapshots.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new(0);
        history.set(1);
        history.set(2);
        history.undo();
        history.undo();
        assert_eq!(*history.current(), 0);
        history.redo();
        history.redo();
        assert_eq!(*history.current(), 2);
    }

    #[test]
    fn test_boundary_calls_are_noops() {
        let mut history = History::new(7);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        history.undo();
        assert_eq!(*history.current(), 7);
        history.redo();
        assert_eq!(*history.current(), 7);
    }

    #[test]
    fn test_set_truncates_redo_branch() {
        let mut history = History::new(0);
        history.set(1);
        history.set(2);
        history.undo();
        assert!(history.can_redo());
        history.set(9);
        assert!(!history.can_redo());
        history.undo();
        assert_eq!(*history.current(), 1);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let mut history = History::with_capacity(0, 5);
        for i in 1..=10 {
            history.set(i);
        }
        assert_eq!(history.snapshot_count(), 5);
        // Undo cannot go back further than the oldest retained snapshot
        while history.can_undo() {
            history.undo();
        }
        assert_eq!(*history.current(), 6);
    }

    #[test]
    fn test_replace_then_commit_is_one_step() {
        let mut history = History::new(0);
        history.set(1);
        let before = history.snapshot_count();
        for i in 2..=50 {
            history.replace(i);
        }
        history.commit();
        assert_eq!(history.snapshot_count(), before + 1);
        assert_eq!(*history.current(), 50);
        history.undo();
        assert_eq!(*history.current(), 1);
    }

    #[test]
    fn test_replace_without_commit_leaves_history_untouched() {
        let mut history = History::new(0);
        history.replace(42);
        assert_eq!(*history.current(), 42);
        assert_eq!(history.snapshot_count(), 1);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_commit_after_undo_truncates_redo_branch() {
        let mut history = History::new(0);
        history.set(1);
        history.set(2);
        history.undo();
        history.replace(5);
        history.commit();
        assert!(!history.can_redo());
        history.undo();
        assert_eq!(*history.current(), 1);
    }

    #[test]
    fn test_snapshots_are_isolated_from_live_mutation() {
        let mut history = History::new(vec![1, 2, 3]);
        let mut next = history.current().clone();
        next.push(4);
        history.set(next);
        let mut scratch = history.current().clone();
        scratch.clear();
        history.replace(scratch);
        history.undo();
        assert_eq!(*history.current(), vec![1, 2, 3]);
        history.redo();
        assert_eq!(*history.current(), vec![1, 2, 3, 4]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Set(i32),
            Replace(i32),
            Commit,
            Undo,
            Redo,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i32>().prop_map(Op::Set),
                any::<i32>().prop_map(Op::Replace),
                Just(Op::Commit),
                Just(Op::Undo),
                Just(Op::Redo),
            ]
        }

        proptest! {
            #[test]
            fn prop_invariants_hold_under_any_op_sequence(
                ops in proptest::collection::vec(op_strategy(), 0..64),
                cap in 1usize..8,
            ) {
                let mut history = History::with_capacity(0i32, cap);
                let mut replaced_since_record = false;
                for op in ops {
                    match op {
                        Op::Set(v) => { history.set(v); replaced_since_record = false; }
                        Op::Replace(v) => { history.replace(v); replaced_since_record = true; }
                        Op::Commit => { history.commit(); replaced_since_record = false; }
                        Op::Undo => {
                            let moved = history.can_undo();
                            history.undo();
                            if moved { replaced_since_record = false; }
                        }
                        Op::Redo => {
                            let moved = history.can_redo();
                            history.redo();
                            if moved { replaced_since_record = false; }
                        }
                    }
                    prop_assert!(history.snapshot_count() >= 1);
                    prop_assert!(history.snapshot_count() <= cap.max(1));
                    prop_assert!(history.index < history.snapshot_count());
                    if !replaced_since_record {
                        prop_assert_eq!(history.current, history.snapshots[history.index]);
                    }
                }
            }
        }
    }
}
