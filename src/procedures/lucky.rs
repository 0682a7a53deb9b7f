/*!
Presolve probes for formulas satisfied by simple assignments.

Some formulas — including ones from real workloads — are satisfied by giving every variable the same value, or by sweeping the variables in index order and propagating each choice, or by satisfying each clause at its first open positive (or negative) literal.
Probing these assignments first costs little and occasionally ends a solve before search begins.

The probes, in order:

1. *Constant false / constant true*: check every clause holds a negative (dually, positive) open literal, then assume each unassigned variable false (true), propagating.
2. *Forward true / forward false*: sweep variables by increasing index, assuming and propagating.
3. *Backward false / backward true*: the same, by decreasing index.
4. *Positive / negative horn*: satisfy each not-yet-satisfied clause at its first open positive (negative) literal, then default the remaining variables the other way.

Each probe assumes on the real trail and unwinds to the root when it fails, so a failed probe leaves nothing behind.
A successful probe leaves a complete conflict-free assignment on the trail for the caller to read off as a model.

Cancellation is polled inside every probe loop, and aborts the whole presolve — unlike an ordinary failure, which only moves on to the next probe.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{literal::Lit, Var},
};

/// The outcome of the presolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LuckyOutcome {
    /// A probe found a complete satisfying assignment, left on the trail.
    Satisfied,

    /// No probe succeeded.
    None,

    /// Cancellation was requested mid-probe.
    Interrupted,
}

/// The outcome of a single probe.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Probe {
    Lucky,
    Unlucky,
    Interrupted,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Runs the presolve probes in order, stopping at the first success.
    pub(crate) fn lucky_phases(&mut self) -> LuckyOutcome {
        debug_assert_eq!(self.trail.level(), 0);
        debug_assert!(self.assumptions.is_empty());

        let probes: [(&str, fn(&mut Self) -> Probe); 8] = [
            ("constant false", Self::constant_false_satisfiable),
            ("constant true", Self::constant_true_satisfiable),
            ("forward true", Self::forward_true_satisfiable),
            ("forward false", Self::forward_false_satisfiable),
            ("backward false", Self::backward_false_satisfiable),
            ("backward true", Self::backward_true_satisfiable),
            ("positive horn", Self::positive_horn_satisfiable),
            ("negative horn", Self::negative_horn_satisfiable),
        ];

        for (name, probe) in probes {
            match probe(self) {
                Probe::Lucky => {
                    log::info!(target: targets::LUCKY, "Lucky: {name}");
                    return LuckyOutcome::Satisfied;
                }
                Probe::Unlucky => {}
                Probe::Interrupted => return LuckyOutcome::Interrupted,
            }
        }

        LuckyOutcome::None
    }

    /// Unwinds a failed or interrupted probe.
    fn unlucky(&mut self, outcome: Probe) -> Probe {
        self.backtrack_to(0);
        outcome
    }

    /// Assumes `literal` at a fresh level and propagates.
    ///
    /// True if propagation completed without conflict.
    fn assume_and_propagate(&mut self, literal: Lit) -> bool {
        self.trail.new_level();
        self.enqueue(literal, None);
        self.propagate().is_none()
    }

    /// True if the clause at `index` of the original roster is satisfied, or holds an open literal of the given polarity.
    fn clause_open_at(&self, index: usize, polarity: bool) -> bool {
        let key = self.clause_db.originals[index];
        let clause = match self.clause_db.arena.get(key) {
            Some(clause) => clause,
            None => return true,
        };
        for literal in clause.literal_slice() {
            match self.vars.value_of_lit(*literal) {
                Some(true) => return true,
                Some(false) => continue,
                None => {
                    if literal.polarity() == polarity {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Sweeps unassigned variables in the given index order, assuming each with `polarity`.
    fn sweep(&mut self, order: impl Iterator<Item = Var>, polarity: bool) -> Probe {
        for var in order {
            if self.terminate_requested() {
                return self.unlucky(Probe::Interrupted);
            }
            if self.vars.value_of(var).is_some() {
                continue;
            }
            if !self.assume_and_propagate(Lit::new(var, polarity)) {
                return self.unlucky(Probe::Unlucky);
            }
        }
        Probe::Lucky
    }

    /// Checks that all clauses keep an open literal of `polarity` under the constant assignment, then applies the sweep.
    fn constant_satisfiable(&mut self, polarity: bool) -> Probe {
        for index in 0..self.clause_db.originals.len() {
            if self.terminate_requested() {
                return self.unlucky(Probe::Interrupted);
            }
            if !self.clause_open_at(index, polarity) {
                return self.unlucky(Probe::Unlucky);
            }
        }
        let count = self.vars.var_count() as Var;
        self.sweep(0..count, polarity)
    }

    fn constant_false_satisfiable(&mut self) -> Probe {
        self.constant_satisfiable(false)
    }

    fn constant_true_satisfiable(&mut self) -> Probe {
        self.constant_satisfiable(true)
    }

    fn forward_true_satisfiable(&mut self) -> Probe {
        let count = self.vars.var_count() as Var;
        self.sweep(0..count, true)
    }

    fn forward_false_satisfiable(&mut self) -> Probe {
        let count = self.vars.var_count() as Var;
        self.sweep(0..count, false)
    }

    fn backward_false_satisfiable(&mut self) -> Probe {
        let count = self.vars.var_count() as Var;
        self.sweep((0..count).rev(), false)
    }

    fn backward_true_satisfiable(&mut self) -> Probe {
        let count = self.vars.var_count() as Var;
        self.sweep((0..count).rev(), true)
    }

    /// Satisfies each open clause at its first open literal of `polarity`, then defaults the rest the other way.
    fn horn_satisfiable(&mut self, polarity: bool) -> Probe {
        for index in 0..self.clause_db.originals.len() {
            if self.terminate_requested() {
                return self.unlucky(Probe::Interrupted);
            }

            let chosen = {
                let key = self.clause_db.originals[index];
                let clause = match self.clause_db.arena.get(key) {
                    Some(clause) => clause,
                    None => continue,
                };
                let mut satisfied = false;
                let mut open = None;
                for literal in clause.literal_slice() {
                    match self.vars.value_of_lit(*literal) {
                        Some(true) => {
                            satisfied = true;
                            break;
                        }
                        Some(false) => continue,
                        None => {
                            if literal.polarity() == polarity && open.is_none() {
                                open = Some(*literal);
                            }
                        }
                    }
                }
                match (satisfied, open) {
                    (true, _) => continue,
                    (false, None) => return self.unlucky(Probe::Unlucky),
                    (false, Some(literal)) => literal,
                }
            };

            if !self.assume_and_propagate(chosen) {
                return self.unlucky(Probe::Unlucky);
            }
        }

        let count = self.vars.var_count() as Var;
        self.sweep(0..count, !polarity)
    }

    fn positive_horn_satisfiable(&mut self) -> Probe {
        self.horn_satisfiable(true)
    }

    fn negative_horn_satisfiable(&mut self) -> Probe {
        self.horn_satisfiable(false)
    }
}
