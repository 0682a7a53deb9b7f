use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    config::Config,
    db::{
        clause::{arena::ClauseRef, ClauseDB},
        trail::Trail,
        variable::VarDB,
        watches::{Watcher, Watches},
    },
    procedures::analysis::Analyzer,
    reports::Report,
    structures::{literal::Lit, Var},
    types::err::{self},
};

use super::{ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context/solve.
    pub counters: Counters,

    /// The variable database.
    pub vars: VarDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// Watch lists for each literal.
    pub(crate) watches: Watches,

    /// The trail of assignments.
    pub(crate) trail: Trail,

    /// Scratch state for conflict analysis.
    pub(crate) analyzer: Analyzer,

    /// The assumptions of the solve in progress, one pseudo decision level each.
    pub(crate) assumptions: Vec<Lit>,

    /// The subset of assumptions responsible for the last unsatisfiable-under-assumptions verdict.
    pub(crate) failed_assumptions: Vec<Lit>,

    /// The model of the last satisfiable verdict.
    pub(crate) model: Vec<Option<bool>>,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// An externally set flag, polled cooperatively to cancel a solve in flight.
    pub(crate) terminate: Option<Arc<AtomicBool>>,

    /// The instant the solve in progress began, for the wall-time budget.
    pub(crate) solve_start: Option<std::time::Instant>,
}

impl<R: rand::Rng> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Report::Unknown
            }
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The value of `var` in the model of the last satisfiable verdict.
    ///
    /// Populated only after a solve reports satisfiable.
    pub fn value_of(&self, var: Var) -> Option<bool> {
        self.model.get(var as usize).copied().flatten()
    }

    /// The model of the last satisfiable verdict, indexed by variable.
    pub fn model(&self) -> &[Option<bool>] {
        &self.model
    }

    /// The subset of assumptions responsible for the last unsatisfiable-under-assumptions verdict.
    ///
    /// Populated only after a solve under assumptions reports unsatisfiable while the formula itself remains open.
    pub fn failed_assumptions(&self) -> &[Lit] {
        &self.failed_assumptions
    }

    /// Installs a flag whose set is read as a request to cancel the solve in flight.
    ///
    /// The flag is only ever read from within the solve, at points where unwinding to the root is sound, and cancellation reports an unknown verdict.
    pub fn set_terminate_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate = Some(flag);
    }

    /// True if cancellation has been requested.
    pub(crate) fn terminate_requested(&self) -> bool {
        match &self.terminate {
            Some(flag) => flag.load(Ordering::Relaxed),
            None => false,
        }
    }
}

// Methods used to record and undo assignments.
impl<R: rand::Rng> GenericContext<R> {
    /// Records `literal` as true at the current level, with `reason` noted for propagated assignments.
    ///
    /// The caller must have established that the variable has no value.
    pub(crate) fn enqueue(&mut self, literal: Lit, reason: Option<ClauseRef>) {
        debug_assert!(self.vars.value_of_lit(literal).is_none());
        self.vars.assign(literal, reason, self.trail.level());
        self.trail.push(literal);
    }

    /// Registers the first two literals of a stored clause in the watch lists of their negations.
    pub(crate) fn attach_clause(&mut self, key: ClauseRef) -> Result<(), err::ErrorKind> {
        let (first, second) = {
            let clause = self
                .clause_db
                .arena
                .get(key)
                .ok_or(err::ClauseDBError::Missing)?;
            debug_assert!(clause.size() > 1);
            (clause.literal(0), clause.literal(1))
        };
        self.watches.watch(first.negate(), Watcher::new(key, second));
        self.watches.watch(second.negate(), Watcher::new(key, first));
        Ok(())
    }

    /// Removes the record of a clause, releasing any lock it holds as a reason.
    ///
    /// Watchers are left for lazy removal.
    pub(crate) fn remove_clause(&mut self, key: ClauseRef) {
        let first = match self.clause_db.arena.get(key) {
            Some(clause) => clause.literal(0),
            None => return,
        };
        if self.vars.value_of_lit(first) == Some(true)
            && self.vars.reason_of(first.var()) == Some(key)
        {
            self.vars.set_reason(first.var(), None);
        }
        self.clause_db.unregister(key);
    }

    /// True if the clause is the reason for the assignment of its first literal.
    pub(crate) fn is_locked(&self, key: ClauseRef) -> bool {
        match self.clause_db.arena.get(key) {
            Some(clause) => {
                let first = clause.literal(0);
                self.vars.value_of_lit(first) == Some(true)
                    && self.vars.reason_of(first.var()) == Some(key)
            }
            None => false,
        }
    }

    /// A level-weighted estimate of how much of the assignment space has been covered.
    pub(crate) fn progress_estimate(&self) -> f64 {
        let var_count = self.vars.var_count();
        if var_count == 0 {
            return 1.0;
        }
        let f = 1.0 / var_count as f64;
        let mut progress = 0.0;

        for level in 0..=self.trail.level() {
            let begin = self.trail.level_start(level);
            let end = match level == self.trail.level() {
                true => self.trail.len(),
                false => self.trail.level_start(level + 1),
            };
            progress += f.powi(level as i32) * (end - begin) as f64;
        }

        progress / var_count as f64
    }
}
