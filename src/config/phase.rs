/// How polarities are remembered when assignments are undone.
///
/// A saved phase is reused when the variable is next chosen for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseSavingMode {
    /// Never save phases.
    None,

    /// Save phases only for assignments made after the most recent decision.
    Limited,

    /// Save the phase of every undone assignment.
    Full,
}
