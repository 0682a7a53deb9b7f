/*!
Boolean constraint propagation over the watch lists.

# Overview

When a literal `p` is assigned true, every clause in which `¬p` is watched may have become unit or unsatisfied.
The watch list for `p` holds exactly these clauses, so propagation walks the trail frontier in FIFO order and, for each newly true literal, inspects its list:

- If the cached blocking literal of an entry is true the clause is satisfied, and is skipped without touching the clause database.
- Otherwise the false literal is normalised to the second watch slot.
  If the first watched literal is true the clause is satisfied.
  Else the remaining literals are scanned for one not (yet) false to promote into the second slot — the lazy watch swap at the core of two-literal watching, moving the entry to the promoted literal's list.
- With no replacement the clause is unit: a false first literal is a conflict, returned to the caller with the unprocessed entries of the current list retained; otherwise the first literal is enqueued with the clause as its reason.

On a conflict the queue is marked drained and assignments already on the trail are retained — rollback is the analyzer's affair, not the propagator's.

# Implementation

The list being walked is taken from the watch table and restored, compacted, when the walk ends.
This sidesteps a borrow of the table across mutation of *other* lists when a watch moves: the promoted literal is never `¬p` (it is not false), so the taken list is never the pushed-to list.

Entries whose handle no longer resolves belong to removed clauses, and are dropped as encountered.
*/

use crate::{
    context::GenericContext,
    db::{clause::arena::ClauseRef, watches::Watcher},
    misc::log::targets::{self},
    structures::literal::Lit,
};

/// What propagation through a single watch entry established.
enum WatchOutcome {
    /// The handle no longer resolves — the entry is dropped.
    Stale,

    /// The clause is satisfied by its first watched literal, cached as the new blocker.
    Satisfied(Lit),

    /// A replacement watch was promoted — the entry moves to the replacement's list, blocking on the first watched literal.
    Moved { promoted: Lit, first: Lit },

    /// No replacement: the clause asserts its first literal.
    Unit(Lit),
}

impl<R: rand::Rng> GenericContext<R> {
    /// Propagates queued assignments until the queue is exhausted or a conflict is found.
    ///
    /// Returns the first violated clause on conflict, and otherwise guarantees the queue is drained.
    pub fn propagate(&mut self) -> Option<ClauseRef> {
        let mut conflict = None;
        let mut propagated: u64 = 0;

        'queue: while self.trail.q_head < self.trail.len() {
            let p = self.trail.assignments[self.trail.q_head];
            self.trail.q_head += 1;
            propagated += 1;

            let false_lit = p.negate();
            let mut watchers = self.watches.take_list(p);

            let mut read = 0;
            let mut write = 0;

            'watchers: while read < watchers.len() {
                let watcher = watchers[read];

                if self.vars.value_of_lit(watcher.blocker) == Some(true) {
                    watchers[write] = watcher;
                    read += 1;
                    write += 1;
                    continue 'watchers;
                }

                let outcome = match self.clause_db.arena.get_mut(watcher.clause) {
                    None => WatchOutcome::Stale,

                    Some(clause) => {
                        // Normalise the false literal to the second watch slot.
                        if clause.literal(0) == false_lit {
                            clause.swap(0, 1);
                        }
                        debug_assert_eq!(clause.literal(1), false_lit);

                        let first = clause.literal(0);
                        if first != watcher.blocker
                            && self.vars.value_of_lit(first) == Some(true)
                        {
                            WatchOutcome::Satisfied(first)
                        } else {
                            let mut replacement = None;
                            for index in 2..clause.size() {
                                if self.vars.value_of_lit(clause.literal(index)) != Some(false) {
                                    replacement = Some(index);
                                    break;
                                }
                            }
                            match replacement {
                                Some(index) => {
                                    clause.swap(1, index);
                                    WatchOutcome::Moved {
                                        promoted: clause.literal(1),
                                        first,
                                    }
                                }
                                None => WatchOutcome::Unit(first),
                            }
                        }
                    }
                };

                match outcome {
                    WatchOutcome::Stale => {
                        read += 1;
                    }

                    WatchOutcome::Satisfied(first) => {
                        watchers[write] = Watcher::new(watcher.clause, first);
                        read += 1;
                        write += 1;
                    }

                    WatchOutcome::Moved { promoted, first } => {
                        self.watches
                            .watch(promoted.negate(), Watcher::new(watcher.clause, first));
                        read += 1;
                    }

                    WatchOutcome::Unit(first) => {
                        watchers[write] = Watcher::new(watcher.clause, first);
                        read += 1;
                        write += 1;

                        match self.vars.value_of_lit(first) {
                            Some(false) => {
                                log::trace!(target: targets::PROPAGATION, "Conflict on {watcher:?}");
                                conflict = Some(watcher.clause);
                                // Mark the queue drained, and keep the unprocessed entries of this list.
                                self.trail.q_head = self.trail.len();
                                while read < watchers.len() {
                                    watchers[write] = watchers[read];
                                    read += 1;
                                    write += 1;
                                }
                            }

                            None => self.enqueue(first, Some(watcher.clause)),

                            Some(true) => {}
                        }
                    }
                }
            }

            watchers.truncate(write);
            self.watches.restore_list(p, watchers);

            if conflict.is_some() {
                break 'queue;
            }
        }

        self.counters.propagations += propagated;
        self.counters.simp_db_props -= propagated as i64;

        conflict
    }
}
