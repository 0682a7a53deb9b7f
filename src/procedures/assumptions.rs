/*!
Final-conflict analysis over assumption literals.

When an assumption is found falsified, the solve owes the caller more than a bare verdict: the (possibly much smaller) subset of assumptions actually responsible.

The walk mirrors conflict analysis, restricted to explanation.
Starting from the falsified assumption, marked literals are taken off the trail in reverse order, down to the first limit:

- A marked literal with no reason is a decision — here necessarily an assumption, as the walk happens before any free decision — and joins the explanation.
- A marked literal with a reason transfers its mark to the non-root literals of the reason clause.

The result is the set of assumptions from which, with the formula, the falsification follows.
*/

use crate::{
    context::GenericContext,
    procedures::analysis::Mark,
    structures::literal::Lit,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Builds the failed-assumption explanation for the falsified assumption `assumption`.
    ///
    /// The explanation is the subset of assumptions whose application led to the complement of `assumption`, together with `assumption` itself.
    pub(crate) fn analyze_final(&mut self, assumption: Lit) {
        self.failed_assumptions.clear();
        self.failed_assumptions.push(assumption);

        if self.trail.level() == 0 {
            return;
        }

        self.analyzer.set_mark(assumption.var(), Mark::Source);

        let root_limit = self.trail.level_start(1);
        for position in (root_limit..self.trail.len()).rev() {
            let literal = self.trail.assignments[position];
            let var = literal.var();

            if self.analyzer.mark(var) == Mark::Undef {
                continue;
            }

            match self.vars.reason_of(var) {
                None => {
                    debug_assert!(self.vars.level_of(var) > 0);
                    self.failed_assumptions.push(literal);
                }

                Some(reason) => {
                    {
                        self.analyzer.scratch.clear();
                        if let Some(clause) = self.clause_db.arena.get(reason) {
                            self.analyzer
                                .scratch
                                .extend_from_slice(&clause.literal_slice()[1..]);
                        }
                    }
                    for index in 0..self.analyzer.scratch.len() {
                        let reason_literal = self.analyzer.scratch[index];
                        if self.vars.level_of(reason_literal.var()) > 0 {
                            self.analyzer.set_mark(reason_literal.var(), Mark::Source);
                        }
                    }
                }
            }

            self.analyzer.set_mark(var, Mark::Undef);
        }

        self.analyzer.set_mark(assumption.var(), Mark::Undef);
    }
}
