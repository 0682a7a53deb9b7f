//! Abstract elements of a solve, and their representations.

pub mod clause;
pub mod literal;

/// A variable, identified by a dense non-negative index.
pub type Var = u32;
