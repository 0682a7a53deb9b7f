/*!
The inner conflict-driven loop.

A search round alternates propagation with conflict handling or decision, bounded by a per-round conflict budget:

```none
          +----------------+
  +-------| pick decision  |<---------------------+
  |       +----------------+                      |
  |               ⌃                               |
  |               | no conflict, budget remains   |
  ⌄               |                               |
+-------------+   |     (queue exhausted)         |
|  propagate  |---+------------------------------>+-- satisfiable, if no eligible variable is unassigned
+-------------+
  |
  | conflict
  ⌄
+-------------+
|  analyze    |--> unsatisfiable, if the conflict is at level 0
+-------------+
  |
  | learned clause, backtrack level
  ⌄
+-------------+
|  backjump,  |
|  install    |
+-------------+
```

Per conflict: the conflict counter advances, the learned clause is installed (a unit is applied directly; anything longer is stored, watched, activity bumped, and its asserting literal enqueued with the clause as reason), and both variable activity channels and the clause activities decay.

Per quiet step: the round's conflict budget and the global budgets are checked (exhaustion saves a progress estimate and returns without a verdict, leaving learned clauses and activities for the next round — what makes restarts cheap); at the root the simplifier runs; an overfull learned roster is reduced; then pending assumptions are applied, or a fresh decision opens a new level.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::Lit,
    types::err::{self},
};

/// How a search round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// A complete satisfying valuation is on the trail.
    Satisfied,

    /// A conflict at level 0 — the formula is unsatisfiable outright.
    FundamentalConflict,

    /// An assumption is falsified, with the responsible assumptions recorded.
    AssumptionConflict,

    /// The round's conflict budget, or a global budget, ran out.
    Unknown,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Searches for a model until a verdict or the given number of conflicts.
    pub(crate) fn search(
        &mut self,
        conflicts_allowed: u64,
    ) -> Result<SearchStatus, err::ErrorKind> {
        let mut round_conflicts: u64 = 0;
        self.counters.restarts += 1;

        loop {
            match self.propagate() {
                Some(conflict) => {
                    self.counters.conflicts += 1;
                    round_conflicts += 1;

                    if self.trail.level() == 0 {
                        return Ok(SearchStatus::FundamentalConflict);
                    }

                    let backtrack_level = self.conflict_analysis(conflict)?;
                    self.backtrack_to(backtrack_level);
                    self.install_learnt()?;

                    self.vars.decay();
                    self.vars.decay_early();
                    self.clause_db.decay_activity();

                    self.counters.cap_adjust_count -= 1;
                    if self.counters.cap_adjust_count == 0 {
                        self.counters.cap_adjust_conflicts *=
                            self.config.clause_db.cap_adjust_inc;
                        self.counters.cap_adjust_count =
                            self.counters.cap_adjust_conflicts as i64;
                        self.counters.max_learnts *= self.config.clause_db.learnt_cap_inc;

                        log::info!(
                            "Conflicts: {} | learnt cap {:.0} of {} | progress {:.3}%",
                            self.counters.conflicts,
                            self.counters.max_learnts,
                            self.clause_db.learnt_count(),
                            self.counters.progress_estimate * 100.0,
                        );
                    }
                }

                None => {
                    if round_conflicts >= conflicts_allowed || !self.within_budget() {
                        // Give up this round; the next resumes with everything learned so far.
                        self.counters.progress_estimate = self.progress_estimate();
                        self.backtrack_to(0);
                        return Ok(SearchStatus::Unknown);
                    }

                    if self.trail.level() == 0 && !self.simplify_at_root()? {
                        return Ok(SearchStatus::FundamentalConflict);
                    }

                    if self.clause_db.learnt_count() as f64 - self.trail.len() as f64
                        >= self.counters.max_learnts
                    {
                        self.reduce_db();
                    }

                    // Apply pending assumptions, one pseudo level each.
                    let mut next: Option<Lit> = None;
                    while (self.trail.level() as usize) < self.assumptions.len() {
                        let assumption = self.assumptions[self.trail.level() as usize];
                        match self.vars.value_of_lit(assumption) {
                            Some(true) => self.trail.new_level(),
                            Some(false) => {
                                log::trace!(target: targets::ANALYSIS, "Assumption {assumption} falsified");
                                self.analyze_final(assumption);
                                return Ok(SearchStatus::AssumptionConflict);
                            }
                            None => {
                                next = Some(assumption);
                                break;
                            }
                        }
                    }

                    let next = match next {
                        Some(assumption) => assumption,
                        None => {
                            self.counters.decisions += 1;
                            match self.pick_branch_lit() {
                                Some(decision) => decision,
                                None => return Ok(SearchStatus::Satisfied),
                            }
                        }
                    };

                    self.trail.new_level();
                    self.enqueue(next, None);
                }
            }
        }
    }

    /// Installs the learned clause left by analysis.
    ///
    /// A unit clause is applied directly as a (root) assignment; anything longer is stored, watched, bumped, and used as the reason for its asserting literal.
    fn install_learnt(&mut self) -> Result<(), err::ErrorKind> {
        match self.analyzer.learnt.len() {
            0 => Err(err::AnalysisError::EmptyResolution.into()),

            1 => {
                let asserted = self.analyzer.learnt[0];
                self.enqueue(asserted, None);
                Ok(())
            }

            _ => {
                let asserted = self.analyzer.learnt[0];
                let literals = std::mem::take(&mut self.analyzer.learnt);
                let key = self.clause_db.store(literals, true)?;
                self.attach_clause(key)?;
                self.clause_db.bump_activity(key);
                self.enqueue(asserted, Some(key));
                Ok(())
            }
        }
    }

    /// True while no global budget is exhausted and no cancellation is requested.
    ///
    /// The wall clock is read only every [time_check_interval](crate::config::Config::time_check_interval) calls.
    pub(crate) fn within_budget(&mut self) -> bool {
        if self.terminate_requested() {
            return false;
        }

        if self
            .config
            .conflict_budget
            .is_some_and(|budget| self.counters.conflicts >= budget)
        {
            return false;
        }

        if self
            .config
            .propagation_budget
            .is_some_and(|budget| self.counters.propagations >= budget)
        {
            return false;
        }

        if let Some(limit) = self.config.time_limit {
            self.counters.time_checks += 1;
            if self.counters.time_checks >= self.config.time_check_interval.value {
                self.counters.time_checks = 0;
                if let Some(start) = self.solve_start {
                    if start.elapsed() > limit {
                        return false;
                    }
                }
            }
        }

        true
    }
}
