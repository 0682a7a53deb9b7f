/// Which sequence sets the conflict budget of each restart round.
///
/// See [schedule](crate::generic::schedule) for the sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartSchedule {
    /// Budgets follow the Luby sequence, scaled by the base interval.
    Luby,

    /// Budgets grow geometrically from the base interval.
    Geometric,
}
