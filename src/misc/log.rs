/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, intended to help when extending the library or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::bcp).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [conflict analysis](crate::procedures::analysis).
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to clause database [reduction](crate::procedures::reduction).
    pub const REDUCTION: &str = "reduction";

    /// Logs related to [backjumping](crate::procedures::backjump).
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to the [clause database](crate::db::clause).
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to garbage [collection](crate::procedures::collection).
    pub const COLLECTION: &str = "collection";

    /// Logs related to the [lucky-phase presolve](crate::procedures::lucky).
    pub const LUCKY: &str = "lucky";

    /// Logs related to root [simplification](crate::procedures::simplify).
    pub const SIMPLIFY: &str = "simplify";
}
