/*!
Garbage collection of the clause arena.

Freed clauses leave garbage slots behind, and once the wasted estimate crosses the configured fraction of the arena the live clauses are relocated into a fresh slot vector.

Relocation invalidates every handle, so the pass rewrites each place a handle is held, in one sweep, before the old arena is dropped:

- Watch lists: entries forward to the new handle, or drop when their clause is gone — which also completes any pending lazy removals.
- Trail reasons: every reason is retargeted through the forward table.
  A reason is rewritten even when its clause was merely forwarded rather than freed, as a dangling reason would poison a later analysis walking through it.
- The original and learned rosters.

No handle from before the pass survives it, which is what makes the arena's slot reuse sound.
*/

use crate::{context::GenericContext, misc::log::targets::{self}};

impl<R: rand::Rng> GenericContext<R> {
    /// Collects garbage if the wasted estimate crosses the configured fraction of the arena.
    pub fn check_garbage(&mut self) {
        if self
            .clause_db
            .arena
            .should_collect(self.clause_db.config.garbage_frac.value)
        {
            self.collect_garbage();
        }
    }

    /// Relocates live clauses into a fresh arena, rewriting every held handle.
    pub fn collect_garbage(&mut self) {
        log::debug!(target: targets::COLLECTION, "Collection started");
        let forward = self.clause_db.arena.collect();

        for list in self.watches.lists_mut() {
            list.retain_mut(|watcher| match forward.forward(watcher.clause) {
                Some(new_key) => {
                    watcher.clause = new_key;
                    true
                }
                None => false,
            });
        }

        for position in 0..self.trail.len() {
            let var = self.trail.assignments[position].var();
            if let Some(old_key) = self.vars.reason_of(var) {
                self.vars.set_reason(var, forward.forward(old_key));
            }
        }

        self.clause_db
            .originals
            .retain_mut(|key| match forward.forward(*key) {
                Some(new_key) => {
                    *key = new_key;
                    true
                }
                None => false,
            });
        self.clause_db
            .learnts
            .retain_mut(|key| match forward.forward(*key) {
                Some(new_key) => {
                    *key = new_key;
                    true
                }
                None => false,
            });
        log::debug!(target: targets::COLLECTION, "Collection complete");
    }
}
