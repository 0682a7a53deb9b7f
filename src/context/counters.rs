//! Counters related to a context/solve.

/// Counters related to a context/solve.
///
/// Most are statistics, though a few — the simplification trackers and the learnt cap — steer the search controller.
pub struct Counters {
    /// A count of calls to solve.
    pub solves: u64,

    /// A count of search rounds begun, i.e. restarts plus initial rounds.
    pub restarts: u64,

    /// A count of decisions made.
    pub decisions: u64,

    /// A count of decisions made at random.
    pub random_decisions: u64,

    /// A count of propagated assignments.
    pub propagations: u64,

    /// A count of conflicts observed.
    pub conflicts: u64,

    /// A count of literals in learned clauses before minimization.
    pub max_literals: u64,

    /// A count of literals in learned clauses after minimization.
    pub tot_literals: u64,

    /// The trail length at the last root simplification, or -1 before any.
    pub simp_db_assigns: i64,

    /// A propagation allowance before the next root simplification pays for itself.
    pub simp_db_props: i64,

    /// The current cap on learned clauses, adjusted geometrically.
    pub max_learnts: f64,

    /// Conflicts until the next cap adjustment.
    pub cap_adjust_count: i64,

    /// The adjustment interval, grown on each adjustment.
    pub cap_adjust_conflicts: f64,

    /// A level-weighted estimate of search progress, saved when a round ends without a verdict.
    pub progress_estimate: f64,

    /// Search iterations since the wall clock was last checked.
    pub time_checks: u32,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            solves: 0,
            restarts: 0,
            decisions: 0,
            random_decisions: 0,
            propagations: 0,
            conflicts: 0,
            max_literals: 0,
            tot_literals: 0,
            simp_db_assigns: -1,
            simp_db_props: 0,
            max_learnts: 0.0,
            cap_adjust_count: 0,
            cap_adjust_conflicts: 0.0,
            progress_estimate: 0.0,
            time_checks: 0,
        }
    }
}
