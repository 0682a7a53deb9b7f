/*!
Simplification of the clause database at the root.

With the trail at level 0 every assignment is permanent, so:

- A clause with a true literal is satisfied for good, and removed.
- A false literal of a surviving clause can never help satisfy it, and is trimmed — from index 2 up, as the watched slots of a live clause are unassigned at the root.

Simplification also settles variable releases (released variables leave the trail and join the free-list), collects garbage if due, and rebuilds the activity heap.

The pass is only worth running when the root assignment has grown since the last pass, and even then only once enough propagation has happened to pay for the sweep — both gates are tracked in the [counters](crate::context::Counters).
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::analysis::Mark,
    types::err::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Simplifies the clause database according to the current root assignment.
    ///
    /// Returns false if a contradiction surfaced, leaving the context permanently unsatisfiable.
    pub fn simplify_at_root(&mut self) -> Result<bool, err::ErrorKind> {
        debug_assert_eq!(self.trail.level(), 0);

        if self.propagate().is_some() {
            return Ok(false);
        }

        if self.trail.len() as i64 == self.counters.simp_db_assigns
            || self.counters.simp_db_props > 0
        {
            return Ok(true);
        }
        log::debug!(target: targets::SIMPLIFY, "Simplification at {} root assignments", self.trail.len());

        self.remove_satisfied(true);
        self.remove_satisfied(false);

        self.settle_released_vars();

        self.check_garbage();
        self.vars.rebuild_order_heap();

        self.counters.simp_db_assigns = self.trail.len() as i64;
        self.counters.simp_db_props =
            (self.clause_db.original_literals + self.clause_db.learnt_literals) as i64;

        Ok(true)
    }

    /// Removes satisfied clauses from a roster, trimming false literals from survivors.
    fn remove_satisfied(&mut self, learnt: bool) {
        let mut roster = match learnt {
            true => std::mem::take(&mut self.clause_db.learnts),
            false => std::mem::take(&mut self.clause_db.originals),
        };

        let mut kept = 0;
        for position in 0..roster.len() {
            let key = roster[position];

            let satisfied = match self.clause_db.arena.get(key) {
                None => continue,
                Some(clause) => clause
                    .literal_slice()
                    .iter()
                    .any(|literal| self.vars.value_of_lit(*literal) == Some(true)),
            };

            if satisfied {
                self.remove_clause(key);
            } else {
                if let Some(clause) = self.clause_db.arena.get_mut(key) {
                    debug_assert!(clause.size() > 1);
                    let mut index = 2;
                    while index < clause.size() {
                        if self.vars.value_of_lit(clause.literal(index)) == Some(false) {
                            clause.swap_remove(index);
                        } else {
                            index += 1;
                        }
                    }
                }
                roster[kept] = key;
                kept += 1;
            }
        }
        roster.truncate(kept);

        match learnt {
            true => self.clause_db.learnts = roster,
            false => self.clause_db.originals = roster,
        }
    }

    /// Completes pending variable releases: released variables leave the trail and join the free-list.
    fn settle_released_vars(&mut self) {
        if self.vars.released_vars.is_empty() {
            return;
        }

        for position in 0..self.vars.released_vars.len() {
            let var = self.vars.released_vars[position];
            self.analyzer.set_mark(var, Mark::Source);
        }

        let analyzer = &self.analyzer;
        self.trail
            .assignments
            .retain(|literal| analyzer.mark(literal.var()) == Mark::Undef);
        self.trail.q_head = self.trail.len();

        for position in 0..self.vars.released_vars.len() {
            let var = self.vars.released_vars[position];
            self.analyzer.set_mark(var, Mark::Undef);
        }

        self.vars.reclaim_released();
    }
}
