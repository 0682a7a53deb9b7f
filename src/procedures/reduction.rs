/*!
Eviction of low-value learned clauses.

Learned clauses accumulate without bound, and most earn nothing after a while: reduction halves the learned roster whenever it outgrows the current cap.

Candidates are sorted so that the clauses worth keeping — binary clauses, and short high-activity clauses — sort last.
The weaker half is then dropped, together with any clause in the stronger half whose activity falls below a uniform share of the current increment, excepting:

- Binary clauses, which are cheap to keep and expensive to relearn.
- Locked clauses — clauses standing as the reason for an assignment on the trail — which must survive for analysis to walk through them.

The cap itself grows geometrically, adjusted by the [search](crate::procedures::search) loop, so reduction becomes rarer as a solve matures.
*/

use std::cmp::Ordering;

use crate::{context::GenericContext, misc::log::targets::{self}};

impl<R: rand::Rng> GenericContext<R> {
    /// Drops roughly the weaker half of the learned clauses.
    pub fn reduce_db(&mut self) {
        let mut learnts = std::mem::take(&mut self.clause_db.learnts);
        if learnts.is_empty() {
            return;
        }
        log::debug!(target: targets::REDUCTION, "Reduction over {} clauses", learnts.len());

        // Any unlocked non-binary clause below this activity goes.
        let extra_limit = self.clause_db.cla_inc / learnts.len() as f64;

        let arena = &self.clause_db.arena;
        learnts.sort_by(|a, b| {
            let (a_size, a_activity) = match arena.get(*a) {
                Some(clause) => (clause.size(), clause.activity()),
                None => (0, 0.0),
            };
            let (b_size, b_activity) = match arena.get(*b) {
                Some(clause) => (clause.size(), clause.activity()),
                None => (0, 0.0),
            };
            // Binary clauses sort last; the rest ascend by activity.
            match (a_size == 2, b_size == 2) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a_activity.partial_cmp(&b_activity).unwrap_or(Ordering::Equal),
            }
        });

        let midpoint = learnts.len() / 2;
        let mut kept = Vec::with_capacity(learnts.len());

        for (position, key) in learnts.iter().enumerate() {
            let (size, activity) = match self.clause_db.arena.get(*key) {
                Some(clause) => (clause.size(), clause.activity()),
                None => continue,
            };

            if size > 2
                && !self.is_locked(*key)
                && (position < midpoint || activity < extra_limit)
            {
                self.remove_clause(*key);
            } else {
                kept.push(*key);
            }
        }

        log::debug!(target: targets::REDUCTION, "Kept {} clauses", kept.len());
        self.clause_db.learnts = kept;

        self.check_garbage();
    }
}
