/*!
Building a formula in a context.

Clauses may only be added at decision level 0, and are simplified on the way in against the root assignment:

- A clause with a true literal, or with a literal and its complement, is already satisfied and is skipped.
- False literals and duplicates are dropped.
- An empty result is a contradiction, recorded as permanent unsatisfiability.
- A unit result is applied directly as a root assignment and propagated — never stored.
- Anything longer is stored and watched.

Variables are created up front — the solver never touches an index it was not given — and may be released back for reuse once nothing constrains them.
*/

pub mod dimacs;

use crate::{
    context::{ContextState, GenericContext},
    structures::{literal::Lit, Var},
    types::err::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// A fresh variable, with an optional user-forced polarity and a decision eligibility flag.
    ///
    /// An ineligible variable is never chosen for a decision, which changes what a satisfiable verdict covers: only eligible variables are guaranteed a value.
    pub fn fresh_var(&mut self, user_polarity: Option<bool>, decision: bool) -> Var {
        let init_activity = match self.config.var_db.random_init_activity {
            true => self.rng.random_range(0.0..1.0) * 0.00001,
            false => 0.0,
        };

        let var = self.vars.fresh_var(user_polarity, decision, init_activity);
        self.watches.ensure_var(var);
        self.analyzer.grow_to(var);
        var
    }

    /// Adds a clause over registered variables.
    ///
    /// Returns false exactly when the addition revealed a contradiction — after which the context is permanently unsatisfiable, and every solve returns so immediately.
    pub fn add_clause(&mut self, literals: &[Lit]) -> Result<bool, err::ErrorKind> {
        debug_assert_eq!(self.trail.level(), 0);

        if self.state == ContextState::Unsatisfiable {
            return Ok(false);
        }
        if self.state != ContextState::Input {
            self.state = ContextState::Input;
        }

        for literal in literals {
            if literal.var() as usize >= self.vars.var_count() {
                return Err(err::BuildError::UnregisteredVariable.into());
            }
        }

        // Sort, then drop false and duplicate literals; a satisfied or tautological clause is skipped whole.
        let mut sorted = literals.to_vec();
        sorted.sort_unstable();

        let mut clause = Vec::with_capacity(sorted.len());
        let mut previous: Option<Lit> = None;
        for literal in sorted {
            if self.vars.value_of_lit(literal) == Some(true)
                || previous.is_some_and(|kept| literal == kept.negate())
            {
                return Ok(true);
            }
            if self.vars.value_of_lit(literal) != Some(false) && previous != Some(literal) {
                clause.push(literal);
                previous = Some(literal);
            }
        }

        match clause.len() {
            0 => {
                self.state = ContextState::Unsatisfiable;
                Ok(false)
            }

            1 => {
                self.enqueue(clause[0], None);
                match self.propagate() {
                    Some(_) => {
                        self.state = ContextState::Unsatisfiable;
                        Ok(false)
                    }
                    None => Ok(true),
                }
            }

            _ => {
                let key = self.clause_db.store(clause, false)?;
                self.attach_clause(key)?;
                Ok(true)
            }
        }
    }

    /// Releases an unassigned variable for later reuse.
    ///
    /// The literal is added as a unit, fixing the variable's value; the index itself is reused for a later fresh variable once root simplification confirms nothing references it.
    /// Only unassigned variables are released, which avoids duplicate releases of the same variable.
    pub fn release_var(&mut self, literal: Lit) -> Result<(), err::ErrorKind> {
        if self.vars.value_of_lit(literal).is_none() {
            self.add_clause(&[literal])?;
            self.vars.release(literal.var());
        }
        Ok(())
    }
}
