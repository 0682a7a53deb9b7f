/*!
A slotted arena owning every stored clause.

Clauses are referenced through [ClauseRef] handles — generation-tagged indices which stay stable until an explicit [collect](ClauseArena::collect) pass.
A handle whose tag does not match the tag of its slot resolves to nothing, so references which outlive their clause degrade to misses rather than aliasing whatever occupies the slot later.

Freeing a clause marks its slot garbage and accrues a wasted-space estimate; slots are not reused between collections, which is what keeps stale handles unambiguous.
Collection copies every live clause into a fresh slot vector in original relative order and hands back a [ForwardTable] so the caller can rewrite every external reference — watch lists, trail reasons, rosters — before the old arena is dropped.
*/

use crate::{db::clause::stored::StoredClause, structures::literal::Lit, types::err::ClauseDBError};

/// A handle to a stored clause: an index into the arena, tagged with the slot's generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClauseRef {
    index: u32,
    tag: u32,
}

struct Slot {
    tag: u32,
    clause: Option<StoredClause>,
}

/// A slotted arena owning every stored clause.
#[derive(Default)]
pub struct ClauseArena {
    slots: Vec<Slot>,

    /// The tag given to the next allocation — monotone, so a tag identifies a clause across the life of the arena.
    next_tag: u32,

    /// A count of literals held by live clauses.
    live_literals: usize,

    /// A count of literals held by freed slots, the wasted-space estimate.
    wasted_literals: usize,
}

impl ClauseArena {
    /// Allocates a slot for a clause, returning its handle.
    ///
    /// Memory exhaustion surfaces as [OutOfMemory](ClauseDBError::OutOfMemory), distinct from any logical verdict.
    pub fn allocate(
        &mut self,
        literals: Vec<Lit>,
        learned: bool,
    ) -> Result<ClauseRef, ClauseDBError> {
        if self.slots.len() >= u32::MAX as usize {
            return Err(ClauseDBError::StorageExhausted);
        }
        let tag = self.next_tag;
        self.next_tag = match self.next_tag.checked_add(1) {
            Some(tag) => tag,
            None => return Err(ClauseDBError::StorageExhausted),
        };

        if self.slots.try_reserve(1).is_err() {
            return Err(ClauseDBError::OutOfMemory);
        }

        let index = self.slots.len() as u32;
        self.live_literals += literals.len();
        self.slots.push(Slot {
            tag,
            clause: Some(StoredClause::new(literals, learned)),
        });

        Ok(ClauseRef { index, tag })
    }

    /// The clause at `key`, if the key is current and the clause live.
    pub fn get(&self, key: ClauseRef) -> Option<&StoredClause> {
        match self.slots.get(key.index as usize) {
            Some(slot) if slot.tag == key.tag => slot.clause.as_ref(),
            _ => None,
        }
    }

    /// The clause at `key`, mutably, if the key is current and the clause live.
    pub fn get_mut(&mut self, key: ClauseRef) -> Option<&mut StoredClause> {
        match self.slots.get_mut(key.index as usize) {
            Some(slot) if slot.tag == key.tag => slot.clause.as_mut(),
            _ => None,
        }
    }

    /// Marks the slot of `key` garbage.
    ///
    /// The slot is retained until the next [collect](ClauseArena::collect), so stale handles miss rather than alias.
    pub fn free(&mut self, key: ClauseRef) {
        if let Some(slot) = self.slots.get_mut(key.index as usize) {
            if slot.tag == key.tag {
                if let Some(clause) = slot.clause.take() {
                    self.live_literals -= clause.size();
                    self.wasted_literals += clause.size() + 1;
                }
            }
        }
    }

    /// True when the wasted-space estimate exceeds `fraction` of the arena.
    pub fn should_collect(&self, fraction: f64) -> bool {
        let total = self.live_literals + self.wasted_literals;
        total > 0 && self.wasted_literals as f64 > fraction * total as f64
    }

    /// Compacts the arena, copying live clauses into fresh slots in original relative order.
    ///
    /// Returns a table forwarding old handles to new — every external reference must be rewritten through the table before use.
    pub fn collect(&mut self) -> ForwardTable {
        let mut forward = vec![None; self.slots.len()];
        let mut fresh = Vec::with_capacity(self.slots.len() - self.wasted());

        for (old_index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(clause) = slot.clause.take() {
                forward[old_index] = Some(ClauseRef {
                    index: fresh.len() as u32,
                    tag: slot.tag,
                });
                fresh.push(Slot {
                    tag: slot.tag,
                    clause: Some(clause),
                });
            }
        }

        self.slots = fresh;
        self.wasted_literals = 0;

        ForwardTable { forward }
    }

    fn wasted(&self) -> usize {
        self.slots.iter().filter(|slot| slot.clause.is_none()).count()
    }
}

/// Forwarding from pre-collection handles to post-collection handles.
pub struct ForwardTable {
    forward: Vec<Option<ClauseRef>>,
}

impl ForwardTable {
    /// The post-collection handle for `old`, if the clause survived collection.
    ///
    /// A handle from before an earlier collection, or to a freed clause, forwards to nothing.
    pub fn forward(&self, old: ClauseRef) -> Option<ClauseRef> {
        match self.forward.get(old.index as usize) {
            Some(Some(new)) if new.tag == old.tag => Some(*new),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lits(ints: &[i64]) -> Vec<Lit> {
        ints.iter().map(|int| Lit::from_int(*int)).collect()
    }

    #[test]
    fn stale_handles_miss() {
        let mut arena = ClauseArena::default();
        let a = arena.allocate(lits(&[1, 2]), false).unwrap();
        let b = arena.allocate(lits(&[1, -2, 3]), false).unwrap();

        arena.free(a);
        assert!(arena.get(a).is_none());
        assert!(arena.get(b).is_some());
    }

    #[test]
    fn collection_forwards_live_clauses() {
        let mut arena = ClauseArena::default();
        let a = arena.allocate(lits(&[1, 2]), false).unwrap();
        let b = arena.allocate(lits(&[-1, 3]), true).unwrap();
        let c = arena.allocate(lits(&[2, -3]), false).unwrap();

        arena.free(b);
        let table = arena.collect();

        assert!(table.forward(b).is_none());

        let a_new = table.forward(a).unwrap();
        let c_new = table.forward(c).unwrap();
        assert_ne!(a_new, c_new);
        assert_eq!(arena.get(a_new).unwrap().literal(0), Lit::from_int(1));
        assert_eq!(arena.get(c_new).unwrap().literal(0), Lit::from_int(2));
    }

    #[test]
    fn waste_accrues_on_free() {
        let mut arena = ClauseArena::default();
        let a = arena.allocate(lits(&[1, 2, 3, 4]), false).unwrap();
        let _b = arena.allocate(lits(&[1, 2]), false).unwrap();

        assert!(!arena.should_collect(0.2));
        arena.free(a);
        assert!(arena.should_collect(0.2));

        arena.collect();
        assert!(!arena.should_collect(0.2));
    }
}
