/// How learned clauses are minimized during conflict analysis.
///
/// Minimization removes literals whose falsity is already implied, transitively, by the other literals of the learned clause.
/// See [analysis](crate::procedures::analysis) for the implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinimizationMode {
    /// Keep the learned clause as produced by resolution.
    None,

    /// Drop a literal if every literal of its reason clause is already in the learned clause.
    Local,

    /// Drop a literal if it is reachable from the learned clause through reason clauses alone, checked recursively.
    Recursive,
}
