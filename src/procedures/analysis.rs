/*!
Analysis of a conflict, producing an asserting learned clause.

# Overview

Analysis implements the standard first-UIP scheme.
Starting from the violated clause, the trail is walked backwards and each visited literal's reason clause is resolved into the pending clause, until exactly one literal assigned at the current decision level remains — the first unique implication point.
That literal, negated, asserts at an earlier level and becomes position 0 of the learned clause.

During resolution:
- Literals assigned at level 0 are dropped — they hold unconditionally.
- Literals from earlier levels are retained in the learned clause.
- Every variable touched is activity bumped, with the early-index rule: when enabled, a variable below the configured fraction of the index range which is currently assigned true is bumped through the second, separately-decaying channel.

# Minimization

A learned clause may carry literals whose falsity is already implied by the rest of the clause, and three minimization modes are supported:

- `None` keeps the clause as resolution produced it.
- `Local` drops a literal when every literal of its reason clause is already marked.
- `Recursive` drops a literal when its assignment is reachable from marked literals through reason clauses alone.
  The reachability walk uses an explicit stack — resolution chains can be long enough to exhaust the call stack — with a three-way memo (source / removable / failed) per visited variable to avoid exponential re-exploration.

# Backtrack level

The second-highest decision level among the learned literals, or 0 for a unit clause.
The literal carrying that level is swapped to position 1, so the clause watches the asserting literal and the literal whose unassignment comes last.
*/

use crate::{
    config::MinimizationMode,
    context::GenericContext,
    db::{clause::arena::ClauseRef, LevelIndex},
    misc::log::targets::{self},
    structures::{literal::Lit, Var},
    types::err::{self},
};

/// The classification of a variable during analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    /// Not yet visited.
    #[default]
    Undef,

    /// Part of the pending learned clause, or on the current-level resolution path.
    Source,

    /// Established removable by the redundancy walk.
    Removable,

    /// Established not removable by the redundancy walk.
    Failed,
}

/// A suspended position in the redundancy walk: the next literal index of the reason of `lit`.
#[derive(Clone, Copy)]
struct Frame {
    index: usize,
    lit: Lit,
}

/// Scratch state for conflict analysis, reused across conflicts.
#[derive(Default)]
pub struct Analyzer {
    /// Classification of each variable.
    seen: Vec<Mark>,

    /// Variables marked since the last clear.
    to_clear: Vec<Var>,

    /// Suspended positions of the redundancy walk.
    stack: Vec<Frame>,

    /// The learned clause under construction.
    pub(crate) learnt: Vec<Lit>,

    /// A copy of the literals of the clause under resolution.
    pub(crate) scratch: Vec<Lit>,
}

impl Analyzer {
    /// Extends the classification table to cover `var`.
    pub fn grow_to(&mut self, var: Var) {
        if self.seen.len() <= var as usize {
            self.seen.resize(var as usize + 1, Mark::Undef);
        }
    }

    pub(crate) fn mark(&self, var: Var) -> Mark {
        self.seen[var as usize]
    }

    pub(crate) fn set_mark(&mut self, var: Var, mark: Mark) {
        self.seen[var as usize] = mark;
    }

    /// Marks `var`, noting it for the end-of-analysis clear.
    pub(crate) fn mark_noted(&mut self, var: Var, mark: Mark) {
        self.seen[var as usize] = mark;
        self.to_clear.push(var);
    }

    /// Clears every noted mark.
    pub(crate) fn clear_marks(&mut self) {
        for var in self.to_clear.drain(..) {
            self.seen[var as usize] = Mark::Undef;
        }
    }

    /// Marks everything pending on the walk stack failed, together with `lit`.
    fn fail_pending(&mut self, lit: Lit) {
        if self.seen[lit.var() as usize] == Mark::Undef {
            self.seen[lit.var() as usize] = Mark::Failed;
            self.to_clear.push(lit.var());
        }
        for frame_index in 0..self.stack.len() {
            let pending = self.stack[frame_index].lit;
            if self.seen[pending.var() as usize] == Mark::Undef {
                self.seen[pending.var() as usize] = Mark::Failed;
                self.to_clear.push(pending.var());
            }
        }
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Analyzes the conflict of `conflict`, leaving the learned clause in the analyzer and returning the backtrack level.
    ///
    /// Must only be called with a decision made, as otherwise there is no unique implication point to find.
    pub fn conflict_analysis(
        &mut self,
        conflict: ClauseRef,
    ) -> Result<LevelIndex, err::ErrorKind> {
        debug_assert!(self.trail.level() > 0);
        log::trace!(target: targets::ANALYSIS, "Analysis of {conflict:?} at level {}", self.trail.level());

        let current_level = self.trail.level();
        let early_limit = self.vars.early_limit();
        let early_bump = self.vars.early_bump_enabled();

        self.analyzer.learnt.clear();
        // Reserve position 0 for the asserting literal.
        self.analyzer.learnt.push(Lit::new(0, false));

        let mut path_count: usize = 0;
        let mut pivot: Option<Lit> = None;
        let mut trail_index = self.trail.len();
        let mut reason = conflict;

        loop {
            // Copy the literals under resolution out, skipping the pivot after the first round.
            {
                let clause = self
                    .clause_db
                    .arena
                    .get(reason)
                    .ok_or(err::ClauseDBError::Missing)?;
                let skip = match pivot {
                    None => 0,
                    Some(_) => 1,
                };
                self.analyzer.scratch.clear();
                self.analyzer
                    .scratch
                    .extend_from_slice(&clause.literal_slice()[skip..]);
            }
            self.clause_db.bump_activity(reason);

            for index in 0..self.analyzer.scratch.len() {
                let literal = self.analyzer.scratch[index];
                let var = literal.var();

                if self.analyzer.mark(var) == Mark::Undef && self.vars.level_of(var) > 0 {
                    let early = early_bump
                        && (var as usize) < early_limit
                        && self.vars.value_of(var) == Some(true);
                    self.vars.bump(var, early);

                    self.analyzer.mark_noted(var, Mark::Source);

                    if self.vars.level_of(var) >= current_level {
                        path_count += 1;
                    } else {
                        self.analyzer.learnt.push(literal);
                    }
                }
            }

            // Take the next marked literal off the trail.
            loop {
                trail_index -= 1;
                let literal = self.trail.assignments[trail_index];
                if self.analyzer.mark(literal.var()) != Mark::Undef {
                    pivot = Some(literal);
                    break;
                }
            }

            let pivot_lit = match pivot {
                Some(literal) => literal,
                None => return Err(err::AnalysisError::NoAssertion.into()),
            };
            self.analyzer.set_mark(pivot_lit.var(), Mark::Undef);
            path_count -= 1;

            if path_count == 0 {
                self.analyzer.learnt[0] = pivot_lit.negate();
                break;
            }

            reason = match self.vars.reason_of(pivot_lit.var()) {
                Some(key) => key,
                None => return Err(err::AnalysisError::NoAssertion.into()),
            };
        }

        self.counters.max_literals += self.analyzer.learnt.len() as u64;
        self.minimize_learnt()?;
        self.counters.tot_literals += self.analyzer.learnt.len() as u64;

        // The backtrack level is the second-highest level in the clause, with its literal swapped to position 1.
        let backtrack_level = match self.analyzer.learnt.len() {
            1 => 0,
            _ => {
                let mut max_index = 1;
                for index in 2..self.analyzer.learnt.len() {
                    let level = self.vars.level_of(self.analyzer.learnt[index].var());
                    if level > self.vars.level_of(self.analyzer.learnt[max_index].var()) {
                        max_index = index;
                    }
                }
                self.analyzer.learnt.swap(1, max_index);
                self.vars.level_of(self.analyzer.learnt[1].var())
            }
        };

        self.analyzer.clear_marks();

        log::trace!(target: targets::ANALYSIS, "Learned {:?}, backtrack level {backtrack_level}", self.analyzer.learnt);
        Ok(backtrack_level)
    }

    /// Applies the configured minimization to the learned clause.
    fn minimize_learnt(&mut self) -> Result<(), err::ErrorKind> {
        match self.config.minimization {
            MinimizationMode::None => Ok(()),

            MinimizationMode::Local => {
                let mut keep = 1;
                'candidates: for index in 1..self.analyzer.learnt.len() {
                    let literal = self.analyzer.learnt[index];
                    let reason = match self.vars.reason_of(literal.var()) {
                        None => {
                            self.analyzer.learnt[keep] = literal;
                            keep += 1;
                            continue 'candidates;
                        }
                        Some(key) => key,
                    };

                    {
                        let clause = self
                            .clause_db
                            .arena
                            .get(reason)
                            .ok_or(err::ClauseDBError::Missing)?;
                        self.analyzer.scratch.clear();
                        self.analyzer
                            .scratch
                            .extend_from_slice(&clause.literal_slice()[1..]);
                    }

                    for scratch_index in 0..self.analyzer.scratch.len() {
                        let reason_literal = self.analyzer.scratch[scratch_index];
                        if self.analyzer.mark(reason_literal.var()) == Mark::Undef
                            && self.vars.level_of(reason_literal.var()) > 0
                        {
                            // The reason reaches outside the clause, so the literal stays.
                            self.analyzer.learnt[keep] = literal;
                            keep += 1;
                            continue 'candidates;
                        }
                    }
                }
                self.analyzer.learnt.truncate(keep);
                Ok(())
            }

            MinimizationMode::Recursive => {
                let mut keep = 1;
                for index in 1..self.analyzer.learnt.len() {
                    let literal = self.analyzer.learnt[index];
                    if self.vars.reason_of(literal.var()).is_none()
                        || !self.literal_redundant(literal)
                    {
                        self.analyzer.learnt[keep] = literal;
                        keep += 1;
                    }
                }
                self.analyzer.learnt.truncate(keep);
                Ok(())
            }
        }
    }

    /// True if the falsity of `literal` is implied by marked literals through reason clauses alone.
    ///
    /// An iterative walk of the reason chain with memoized classification: a variable established removable or failed is never re-explored.
    fn literal_redundant(&mut self, literal: Lit) -> bool {
        debug_assert!(matches!(
            self.analyzer.mark(literal.var()),
            Mark::Undef | Mark::Source
        ));

        let mut reason = match self.vars.reason_of(literal.var()) {
            Some(key) => key,
            None => return false,
        };
        let mut current = literal;
        let mut index: usize = 1;
        self.analyzer.stack.clear();

        'walk: loop {
            let next = self
                .clause_db
                .arena
                .get(reason)
                .and_then(|clause| clause.literal_slice().get(index).copied());

            match next {
                Some(parent) => {
                    index += 1;
                    let var = parent.var();

                    // Settled one way or the other, or unconditionally assigned.
                    if self.vars.level_of(var) == 0
                        || matches!(self.analyzer.mark(var), Mark::Source | Mark::Removable)
                    {
                        continue 'walk;
                    }

                    if self.vars.reason_of(var).is_none()
                        || self.analyzer.mark(var) == Mark::Failed
                    {
                        self.analyzer.fail_pending(current);
                        return false;
                    }

                    // Suspend the current clause and descend into the parent's reason.
                    self.analyzer.stack.push(Frame {
                        index,
                        lit: current,
                    });
                    index = 1;
                    current = parent;
                    reason = match self.vars.reason_of(var) {
                        Some(key) => key,
                        None => return false,
                    };
                }

                None => {
                    // Every parent of `current` checked out.
                    if self.analyzer.mark(current.var()) == Mark::Undef {
                        self.analyzer.mark_noted(current.var(), Mark::Removable);
                    }

                    match self.analyzer.stack.pop() {
                        None => break 'walk,
                        Some(frame) => {
                            index = frame.index;
                            current = frame.lit;
                            reason = match self.vars.reason_of(current.var()) {
                                Some(key) => key,
                                None => return false,
                            };
                        }
                    }
                }
            }
        }

        true
    }
}
