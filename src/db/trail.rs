/*!
The trail of assignments.

Assignments are recorded in the order made, with a stack of offsets marking where each decision level begins.
The queue head marks the frontier of propagation: assignments before it have been propagated, assignments at or after it are pending.

Trail order respects propagation causality — every literal of the reason clause of an assignment, other than the assigned literal, sits at or before the assignment on the trail.
This is what lets conflict analysis walk the trail backwards in place of an explicit implication graph.
*/

use crate::{db::LevelIndex, structures::literal::Lit};

/// The trail of assignments, with level limits and the propagation frontier.
#[derive(Default)]
pub struct Trail {
    /// Assigned literals, in assignment order.
    pub(crate) assignments: Vec<Lit>,

    /// The offset into `assignments` at which each level begins.
    pub(crate) limits: Vec<usize>,

    /// The index of the first assignment not yet propagated.
    pub(crate) q_head: usize,
}

impl Trail {
    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.limits.len() as LevelIndex
    }

    /// A count of assignments on the trail.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True if nothing has been assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Opens a fresh decision level.
    pub fn new_level(&mut self) {
        self.limits.push(self.assignments.len());
    }

    /// Records an assignment at the current level.
    pub fn push(&mut self, literal: Lit) {
        self.assignments.push(literal);
    }

    /// The offset at which `level` begins.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        match level {
            0 => 0,
            _ => self.limits[level as usize - 1],
        }
    }

    /// The assignments of the trail, in order.
    pub fn assignments(&self) -> &[Lit] {
        &self.assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_bound_assignments() {
        let mut trail = Trail::default();
        trail.push(Lit::from_int(1));
        trail.new_level();
        trail.push(Lit::from_int(2));
        trail.push(Lit::from_int(3));
        trail.new_level();

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.level_start(0), 0);
        assert_eq!(trail.level_start(1), 1);
        assert_eq!(trail.level_start(2), 3);
    }
}
