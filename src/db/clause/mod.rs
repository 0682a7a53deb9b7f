/*!
A database of clause related things.

Non-unit clauses are owned by a relocating [arena], and referenced elsewhere — watch lists, trail reasons, the original/learned rosters here — only through [ClauseRef](arena::ClauseRef) handles.

Unit clauses are never stored: the builder and the learnt-installation path apply them directly as (level 0) assignments.

The database also keeps the activity bookkeeping for learned clauses: a shared increment grown multiplicatively each conflict, with all activities rescaled when the increment would overflow a bounded magnitude.
*/

pub mod arena;
pub mod stored;

use arena::{ClauseArena, ClauseRef};

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config},
    misc::log::targets::{self},
    structures::literal::Lit,
    types::err::{self},
};

/// The magnitude at which clause activities are rescaled.
const RESCALE_LIMIT: Activity = 1e20;

/// A database of clause related things.
pub struct ClauseDB {
    /// Clause database specific configuration parameters.
    pub(crate) config: ClauseDBConfig,

    /// The arena owning all stored clauses.
    pub(crate) arena: ClauseArena,

    /// Handles to the original clauses, in order of addition.
    pub(crate) originals: Vec<ClauseRef>,

    /// Handles to the learned clauses.
    pub(crate) learnts: Vec<ClauseRef>,

    /// The increment applied when bumping a clause.
    pub(crate) cla_inc: Activity,

    /// A count of literals across original clauses.
    pub(crate) original_literals: u64,

    /// A count of literals across learned clauses.
    pub(crate) learnt_literals: u64,
}

impl ClauseDB {
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            config: config.clause_db.clone(),
            arena: ClauseArena::default(),
            originals: Vec::default(),
            learnts: Vec::default(),
            cla_inc: 1.0,
            original_literals: 0,
            learnt_literals: 0,
        }
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.originals.len()
    }

    /// A count of learned clauses.
    pub fn learnt_count(&self) -> usize {
        self.learnts.len()
    }

    /// Stores a clause, registering it on the relevant roster.
    ///
    /// The clause must have at least two literals — unit clauses are applied as assignments, not stored.
    pub fn store(
        &mut self,
        literals: Vec<Lit>,
        learned: bool,
    ) -> Result<ClauseRef, err::ClauseDBError> {
        debug_assert!(literals.len() > 1);
        let size = literals.len() as u64;
        let key = self.arena.allocate(literals, learned)?;
        log::trace!(target: targets::CLAUSE_DB, "Stored {key:?}, learned: {learned}");
        if learned {
            self.learnts.push(key);
            self.learnt_literals += size;
        } else {
            self.originals.push(key);
            self.original_literals += size;
        }
        Ok(key)
    }

    /// Removes the record of a clause and marks its slot garbage.
    ///
    /// Watch list and roster entries are not touched here — watchers are dropped lazily, and the caller maintains the rosters.
    pub fn unregister(&mut self, key: ClauseRef) {
        if let Some((size, learned)) = self
            .arena
            .get(key)
            .map(|clause| (clause.size() as u64, clause.is_learned()))
        {
            if learned {
                self.learnt_literals -= size;
            } else {
                self.original_literals -= size;
            }
            self.arena.free(key);
        }
    }

    /// Bumps the activity of a clause, if learned, rescaling all clause activities when the bump overflows the permitted magnitude.
    pub fn bump_activity(&mut self, key: ClauseRef) {
        let bumped = match self.arena.get_mut(key) {
            Some(clause) if clause.is_learned() => {
                let bumped = clause.activity() + self.cla_inc;
                clause.set_activity(bumped);
                bumped
            }
            _ => return,
        };

        if bumped > RESCALE_LIMIT {
            let factor = 1.0 / RESCALE_LIMIT;
            for index in 0..self.learnts.len() {
                let learnt = self.learnts[index];
                if let Some(clause) = self.arena.get_mut(learnt) {
                    let scaled = clause.activity() * factor;
                    clause.set_activity(scaled);
                }
            }
            self.cla_inc *= factor;
        }
    }

    /// Decays clause activities, by growing the increment applied on a bump.
    pub fn decay_activity(&mut self) {
        self.cla_inc *= 1.0 / self.config.clause_decay.value;
    }
}
