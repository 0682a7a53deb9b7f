/*!
Watch lists, keyed by literal.

For a stored clause the negations of the first two literals each key a watch entry for the clause.
So, when a literal `p` is assigned true, the list for `p` holds exactly the clauses in which `¬p` is a watched literal — the clauses which may have become unit or unsatisfied.

Each entry carries a blocking literal, some other literal of the clause cached at the time the watch was made.
If the blocking literal is true the clause is satisfied, and propagation skips the clause without touching the clause database.

Entries are removed lazily: a freed clause leaves its watchers in place, and these are dropped when propagation fails to resolve their handle, or rewritten away wholesale on garbage [collection](crate::procedures::collection).
*/

use crate::{
    db::clause::arena::ClauseRef,
    structures::{literal::Lit, Var},
};

/// A watch list entry: a clause handle and a cached blocking literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Watcher {
    pub clause: ClauseRef,
    pub blocker: Lit,
}

impl Watcher {
    pub fn new(clause: ClauseRef, blocker: Lit) -> Self {
        Watcher { clause, blocker }
    }
}

/// Watch lists for each literal, indexed by the packed form of the literal.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<Watcher>>,
}

impl Watches {
    /// Extends the lists to cover both literals of `var`.
    pub fn ensure_var(&mut self, var: Var) {
        let required = (var as usize + 1) * 2;
        if self.lists.len() < required {
            self.lists.resize_with(required, Vec::default);
        }
    }

    /// Adds a watcher under `literal`.
    ///
    /// `literal` is the literal whose assignment makes the clause of interest — the negation of the watched literal.
    pub fn watch(&mut self, literal: Lit, watcher: Watcher) {
        self.lists[literal.index()].push(watcher);
    }

    /// The list for `literal`, mutably.
    pub fn list_mut(&mut self, literal: Lit) -> &mut Vec<Watcher> {
        &mut self.lists[literal.index()]
    }

    /// Takes the list for `literal`, leaving an empty list in place.
    ///
    /// Used by propagation to walk a list while other lists are extended; the caller restores the (compacted) list after.
    pub fn take_list(&mut self, literal: Lit) -> Vec<Watcher> {
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Restores a list taken with [take_list](Watches::take_list).
    pub fn restore_list(&mut self, literal: Lit, list: Vec<Watcher>) {
        self.lists[literal.index()] = list;
    }

    /// Every list, mutably — for wholesale rewrites on garbage collection.
    pub fn lists_mut(&mut self) -> impl Iterator<Item = &mut Vec<Watcher>> {
        self.lists.iter_mut()
    }
}
