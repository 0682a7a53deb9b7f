/*!
Recovery from a conflict, by undoing levels of the trail.

A backjump from the current level to a target level unassigns every literal recorded after the target level's limit, in reverse trail order.
For each undone assignment:

- The phase may be saved, per the configured [mode](crate::config::PhaseSavingMode) — always, only for assignments above the most recent decision, or never.
- The phase memory of the variable is noted live either way, so the decision heuristic can tell a variable that has been through search from one that has not.
- The variable rejoins the activity heap, if decision eligible.

The propagation frontier is pulled back to the target limit, so nothing undone is left queued.
*/

use crate::{
    config::PhaseSavingMode,
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Reverts to the state at `target`, keeping assignments at the target level but none beyond.
    ///
    /// A target at or above the current level is a no-op.
    pub fn backtrack_to(&mut self, target: LevelIndex) {
        if self.trail.level() <= target {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        let target_length = self.trail.limits[target as usize];
        let deepest_decision = match self.trail.limits.last() {
            Some(limit) => *limit,
            None => 0,
        };

        for position in (target_length..self.trail.len()).rev() {
            let literal = self.trail.assignments[position];
            let var = literal.var();

            self.vars.clear_value(var);

            let save = match self.config.phase_saving {
                PhaseSavingMode::Full => true,
                PhaseSavingMode::Limited => position > deepest_decision,
                PhaseSavingMode::None => false,
            };
            if save {
                self.vars.save_phase(var, literal.polarity());
            }
            self.vars.set_phase_stored(var);

            self.vars.heap_insert(var);
        }

        self.trail.q_head = target_length;
        self.trail.assignments.truncate(target_length);
        self.trail.limits.truncate(target as usize);
    }
}
