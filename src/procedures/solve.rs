/*!
The outer solve loop: restart scheduling, budgets, and verdicts.

# Overview

A solve is a sequence of [search](crate::procedures::search) rounds, each given a conflict budget drawn from the configured restart [schedule](crate::generic::schedule).
A round ending without a verdict triggers a restart — the partial assignment is discarded, learned clauses and activities are not — unless a global budget has run out, in which case the solve reports an unknown verdict and the context stays reusable.

Before the first round, and when no assumptions are pending, the [lucky-phase presolve](crate::procedures::lucky) probes for formulas satisfied by simple assignments.

# Verdicts

- *Satisfiable*: the full model is copied out for the model accessor, and the trail unwound.
- *Unsatisfiable*, fundamentally: the state becomes permanently unsatisfiable, and every later solve returns immediately.
- *Unsatisfiable under assumptions*: the responsible assumptions are held for the failed-assumption accessor; the formula itself remains open and the context reusable.
- *Unknown*: a budget ran out or cancellation was requested; a later call with a larger budget resumes from everything learned.
*/

use crate::{
    config::RestartSchedule,
    context::{ContextState, GenericContext},
    generic::schedule::luby,
    procedures::{lucky::LuckyOutcome, search::SearchStatus},
    reports::Report,
    structures::{literal::Lit, Var},
    types::err::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        self.solve_assuming(&[])
    }

    /// Determines the satisfiability of the formula under the given assumptions.
    ///
    /// Each assumption opens a pseudo decision level before any free decision is made, and all are unwound when the solve ends.
    pub fn solve_assuming(&mut self, assumptions: &[Lit]) -> Result<Report, err::ErrorKind> {
        self.model.clear();
        self.failed_assumptions.clear();

        if self.state == ContextState::Unsatisfiable {
            return Ok(Report::Unsatisfiable);
        }

        self.assumptions = assumptions.to_vec();
        self.counters.solves += 1;
        self.solve_start = Some(std::time::Instant::now());
        self.state = ContextState::Solving;

        self.counters.max_learnts = (self.clause_db.original_count() as f64
            * self.config.clause_db.learnt_cap_factor)
            .max(self.config.clause_db.min_learnts as f64);
        self.counters.cap_adjust_conflicts = self.config.clause_db.cap_adjust_start;
        self.counters.cap_adjust_count = self.counters.cap_adjust_conflicts as i64;

        let mut verdict: Option<SearchStatus> = None;

        if self.config.lucky && self.assumptions.is_empty() {
            match self.lucky_phases() {
                LuckyOutcome::Satisfied => verdict = Some(SearchStatus::Satisfied),
                LuckyOutcome::Interrupted => verdict = Some(SearchStatus::Unknown),
                LuckyOutcome::None => {}
            }
        }

        let mut round: u32 = 0;
        while verdict.is_none() {
            let budget = match self.config.restarts {
                RestartSchedule::Luby => luby(self.config.restart_inc.value, round),
                RestartSchedule::Geometric => self.config.restart_inc.value.powi(round as i32),
            } * self.config.restart_first.value as f64;

            match self.search(budget as u64)? {
                SearchStatus::Unknown => {
                    if !self.within_budget() {
                        verdict = Some(SearchStatus::Unknown);
                    }
                }
                decisive => verdict = Some(decisive),
            }
            round += 1;
        }

        let report = match verdict {
            Some(SearchStatus::Satisfied) => {
                self.model = (0..self.vars.var_count() as Var)
                    .map(|var| self.vars.value_of(var))
                    .collect();
                self.state = ContextState::Satisfiable;
                Report::Satisfiable
            }

            Some(SearchStatus::FundamentalConflict) => {
                self.state = ContextState::Unsatisfiable;
                Report::Unsatisfiable
            }

            Some(SearchStatus::AssumptionConflict) => {
                self.state = ContextState::Input;
                Report::Unsatisfiable
            }

            Some(SearchStatus::Unknown) | None => {
                self.state = ContextState::Input;
                Report::Unknown
            }
        };

        self.backtrack_to(0);
        self.assumptions.clear();

        Ok(report)
    }
}
