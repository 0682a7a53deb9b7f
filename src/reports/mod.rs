//! Reports from a solve.

/// The verdict of a solve.
///
/// Satisfiability verdicts are ordinary values — only resource failures cross the solve boundary as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// A complete satisfying valuation was found, available through the model accessor.
    Satisfiable,

    /// No satisfying valuation exists — for the formula itself, or under the given assumptions.
    ///
    /// Under nonempty assumptions the responsible assumptions are available through the failed-assumption accessor.
    Unsatisfiable,

    /// No verdict: a budget was exhausted or cancellation requested.
    ///
    /// The context remains reusable, and a later solve with a larger budget resumes with learned clauses and activities intact.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
