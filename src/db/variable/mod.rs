/*!
A database of variable related things.

For each variable the database records:

- The current value, if any, together with the reason clause and decision level of the assignment.
- An activity, kept on a max [IndexHeap] so the most active unassigned variable is cheap to take.
- Phase memory: the last saved polarity, whether a phase has been saved at all, and any user-forced polarity.
- Decision eligibility.

# Activity channels

Activity is bumped by a shared increment which itself grows multiplicatively every conflict — equivalent to decaying every activity, without touching every entry.
Two increments are kept: the primary one, and a second for the early-index bump rule of [analysis](crate::procedures::analysis), each decaying at its own configured rate.
When a bump would pass the permitted magnitude, every activity and both increments are scaled down together.

# The free-list

Variables may be [released](crate::context::GenericContext::release_var) once nothing constrains them, and are then reused for later requests for a fresh variable.
This is a rare path: released variables are parked until root simplification confirms the release, and only then join the free-list.
*/

use crate::{
    config::{dbs::VarDBConfig, Activity, Config},
    db::{clause::arena::ClauseRef, LevelIndex},
    generic::index_heap::IndexHeap,
    structures::{literal::Lit, Var},
};

/// The magnitude at which variable activities are rescaled.
const RESCALE_LIMIT: Activity = 1e100;

/// A database of variable related things.
pub struct VarDB {
    config: VarDBConfig,

    /// The current value of each variable.
    values: Vec<Option<bool>>,

    /// The reason clause of each assignment, if propagated rather than decided.
    reasons: Vec<Option<ClauseRef>>,

    /// The decision level of each assignment.
    levels: Vec<LevelIndex>,

    /// Activities, with unassigned decision variables on the heap.
    pub(crate) activity_heap: IndexHeap<Activity>,

    /// The primary activity increment.
    var_inc: Activity,

    /// The increment of the early-index channel.
    early_inc: Activity,

    /// Decision eligibility of each variable.
    decision: Vec<bool>,

    /// The saved polarity of each variable.
    saved_phase: Vec<bool>,

    /// Whether a phase has ever been saved for each variable.
    phase_stored: Vec<bool>,

    /// A user-forced polarity, taking precedence over any heuristic.
    user_polarity: Vec<Option<bool>>,

    /// The next never-used variable index.
    next_var: Var,

    /// Variables ready for reuse.
    free_vars: Vec<Var>,

    /// Variables released but not yet confirmed free by simplification.
    pub(crate) released_vars: Vec<Var>,
}

impl VarDB {
    pub fn new(config: &Config) -> Self {
        VarDB {
            config: config.var_db.clone(),
            values: Vec::default(),
            reasons: Vec::default(),
            levels: Vec::default(),
            activity_heap: IndexHeap::default(),
            var_inc: 1.0,
            early_inc: 1.0,
            decision: Vec::default(),
            saved_phase: Vec::default(),
            phase_stored: Vec::default(),
            user_polarity: Vec::default(),
            next_var: 0,
            free_vars: Vec::default(),
            released_vars: Vec::default(),
        }
    }

    /// A fresh variable, drawn from the free-list when possible.
    ///
    /// `init_activity` seeds the activity — zero, or a small random value when configured.
    pub fn fresh_var(
        &mut self,
        user_polarity: Option<bool>,
        decision: bool,
        init_activity: Activity,
    ) -> Var {
        let var = match self.free_vars.pop() {
            Some(free) => free,
            None => {
                let var = self.next_var;
                self.next_var += 1;
                self.values.push(None);
                self.reasons.push(None);
                self.levels.push(0);
                self.decision.push(false);
                self.saved_phase.push(self.config.default_polarity);
                self.phase_stored.push(false);
                self.user_polarity.push(None);
                self.activity_heap.reserve(var as usize);
                var
            }
        };

        let index = var as usize;
        self.values[index] = None;
        self.reasons[index] = None;
        self.levels[index] = 0;
        self.saved_phase[index] = self.config.default_polarity;
        self.phase_stored[index] = false;
        self.user_polarity[index] = user_polarity;
        self.activity_heap.update(index, init_activity);
        self.decision[index] = false;
        self.set_decision_eligible(var, decision);

        var
    }

    /// A count of variables, spanning the index range in use.
    pub fn var_count(&self) -> usize {
        self.next_var as usize
    }

    /// The value of `var` on the current (partial) valuation.
    pub fn value_of(&self, var: Var) -> Option<bool> {
        self.values[var as usize]
    }

    /// The value of `literal` on the current (partial) valuation.
    pub fn value_of_lit(&self, literal: Lit) -> Option<bool> {
        self.values[literal.var() as usize].map(|value| value == literal.polarity())
    }

    /// Makes `literal` true, with the given reason and level.
    pub fn assign(&mut self, literal: Lit, reason: Option<ClauseRef>, level: LevelIndex) {
        let index = literal.var() as usize;
        self.values[index] = Some(literal.polarity());
        self.reasons[index] = reason;
        self.levels[index] = level;
    }

    /// Clears the value of `var`.
    pub fn clear_value(&mut self, var: Var) {
        self.values[var as usize] = None;
    }

    /// The reason clause of the assignment to `var`, if propagated.
    pub fn reason_of(&self, var: Var) -> Option<ClauseRef> {
        self.reasons[var as usize]
    }

    pub fn set_reason(&mut self, var: Var, reason: Option<ClauseRef>) {
        self.reasons[var as usize] = reason;
    }

    /// The decision level at which `var` was assigned.
    ///
    /// Meaningful only while `var` has a value.
    pub fn level_of(&self, var: Var) -> LevelIndex {
        self.levels[var as usize]
    }

    /// True if `var` may be chosen for a decision.
    pub fn is_decision(&self, var: Var) -> bool {
        self.decision[var as usize]
    }

    /// Sets whether `var` may be chosen for a decision.
    pub fn set_decision_eligible(&mut self, var: Var, eligible: bool) {
        self.decision[var as usize] = eligible;
        self.heap_insert(var);
    }

    /// Places `var` on the activity heap, if eligible and unassigned.
    pub fn heap_insert(&mut self, var: Var) {
        let index = var as usize;
        if self.decision[index] && self.values[index].is_none() {
            self.activity_heap.activate(index);
        }
    }

    /// Rebuilds the activity heap over the eligible unassigned variables.
    pub fn rebuild_order_heap(&mut self) {
        let eligible: Vec<usize> = (0..self.var_count())
            .filter(|&index| self.decision[index] && self.values[index].is_none())
            .collect();
        self.activity_heap.rebuild(eligible.into_iter());
    }

    /// The saved polarity of `var`.
    pub fn saved_phase(&self, var: Var) -> bool {
        self.saved_phase[var as usize]
    }

    /// Saves a polarity for `var`.
    pub fn save_phase(&mut self, var: Var, polarity: bool) {
        self.saved_phase[var as usize] = polarity;
    }

    /// True if a phase has ever been saved for `var`.
    pub fn phase_stored(&self, var: Var) -> bool {
        self.phase_stored[var as usize]
    }

    /// Notes that the phase memory of `var` is live.
    pub fn set_phase_stored(&mut self, var: Var) {
        self.phase_stored[var as usize] = true;
    }

    /// The user-forced polarity of `var`, if set.
    pub fn user_polarity(&self, var: Var) -> Option<bool> {
        self.user_polarity[var as usize]
    }

    /// Bumps the activity of `var` through the primary or early-index channel.
    pub fn bump(&mut self, var: Var, early: bool) {
        let increment = if early { self.early_inc } else { self.var_inc };
        let index = var as usize;
        let bumped = self.activity_heap.value_at(index) + increment;
        self.activity_heap.update(index, bumped);

        if bumped > RESCALE_LIMIT {
            let factor = 1.0 / RESCALE_LIMIT;
            self.activity_heap.apply_to_all(|activity| activity * factor);
            self.var_inc *= factor;
            self.early_inc *= factor;
        }
    }

    /// Decays primary-channel activities, by growing the increment applied on a bump.
    pub fn decay(&mut self) {
        self.var_inc *= 1.0 / self.config.var_decay.value;
    }

    /// Decays early-channel activities.
    pub fn decay_early(&mut self) {
        self.early_inc *= 1.0 / self.config.early_decay.value;
    }

    /// The variable index bound below which the early-index bump rule applies.
    pub fn early_limit(&self) -> usize {
        (self.var_count() as f64 * self.config.early_fraction.value) as usize
    }

    /// True if the early-index bump rule is enabled.
    pub fn early_bump_enabled(&self) -> bool {
        self.config.early_bump
    }

    /// The default polarity for early-index variables with no saved phase.
    pub fn default_polarity(&self) -> bool {
        self.config.default_polarity
    }

    /// Parks `var` for reuse, pending confirmation by simplification.
    pub fn release(&mut self, var: Var) {
        self.released_vars.push(var);
    }

    /// Moves parked variables onto the free-list.
    pub fn reclaim_released(&mut self) {
        self.free_vars.append(&mut self.released_vars);
    }
}
