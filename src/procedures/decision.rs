/*!
Choosing the next branching literal.

# Variable

With probability [random_var_freq](crate::config::Config::random_var_freq) a uniform member of the activity heap is proposed; a proposal which is assigned or ineligible falls through to the heuristic.
Otherwise variables are popped off the activity heap until one is unassigned and decision eligible — stale entries are discarded, not re-inserted, as a popped variable rejoins the heap when its assignment is undone.

An empty heap with no proposal means every eligible variable is assigned, and no decision can be made.

# Polarity

In order of precedence:

1. A user-forced polarity for the variable.
2. A uniform coin, when random polarity is configured.
3. The saved phase, when the variable has been through search before.
4. An index split for variables never yet saved: variables below the early fraction of the index range take the configured default polarity, the rest take true — with the choice written back as the saved phase.

The index split pairs with the early-index activity bump of [analysis](crate::procedures::analysis); both lean on early-indexed variables being structurally significant in the workloads the heuristic was tuned against, and both are configuration, not constants.
*/

use crate::{
    context::GenericContext,
    structures::{literal::Lit, Var},
};

impl<R: rand::Rng> GenericContext<R> {
    /// The next branching literal, or none if every eligible variable is assigned.
    pub fn pick_branch_lit(&mut self) -> Option<Lit> {
        let mut next: Option<Var> = None;

        // Random decision:
        if self.vars.activity_heap.heap_len() > 0
            && self.rng.random_bool(self.config.random_var_freq.value)
        {
            let entry = self
                .rng
                .random_range(0..self.vars.activity_heap.heap_len());
            let candidate = self.vars.activity_heap.heap_entry(entry) as Var;
            if self.vars.value_of(candidate).is_none() && self.vars.is_decision(candidate) {
                self.counters.random_decisions += 1;
            }
            next = Some(candidate);
        }

        // Activity based decision:
        loop {
            match next {
                Some(var) if self.vars.value_of(var).is_none() && self.vars.is_decision(var) => {
                    break;
                }
                _ => match self.vars.activity_heap.pop_max() {
                    None => {
                        next = None;
                        break;
                    }
                    Some(var) => next = Some(var as Var),
                },
            }
        }

        let var = next?;
        Some(Lit::new(var, self.choose_polarity(var)))
    }

    /// The polarity for a decision on `var`.
    fn choose_polarity(&mut self, var: Var) -> bool {
        if let Some(forced) = self.vars.user_polarity(var) {
            return forced;
        }

        if self.config.random_polarity {
            return self.rng.random_bool(0.5);
        }

        if self.vars.phase_stored(var) {
            return self.vars.saved_phase(var);
        }

        // Never saved: split on index, and fix the choice as the saved phase.
        if (var as usize) < self.vars.early_limit() {
            self.vars.default_polarity()
        } else {
            self.vars.save_phase(var, true);
            true
        }
    }
}
