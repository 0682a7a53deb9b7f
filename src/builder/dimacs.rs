/*!
Reading and writing formulas in the DIMACS clause-list format.

The format: literals as signed integers with variables indexed from 1, clauses terminated by a zero, `c` lines as comments, and an optional `p cnf <variables> <clauses>` header.

Reading is a convenience for tests and embeddings; writing is a diagnostic export — the live formula, simplified against the root assignment, with variables remapped densely.
Neither is required for correctness of a solve.
*/

use std::io::{BufRead, Write};

use crate::{
    context::GenericContext,
    structures::{clause::Clause, literal::Lit, Var},
    types::err::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a DIMACS formula into the context, creating variables on demand.
    ///
    /// Returns false exactly when an added clause revealed a contradiction, as [add_clause](GenericContext::add_clause) does.
    pub fn read_dimacs(&mut self, reader: impl BufRead) -> Result<bool, err::ErrorKind> {
        let mut clause: Vec<Lit> = Vec::default();
        let mut still_consistent = true;

        for (line_number, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(_) => return Err(err::ParseError::Io.into()),
            };
            let line = line.trim();

            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            if line.starts_with('%') {
                break;
            }
            if line.starts_with('p') {
                let mut parts = line.split_whitespace();
                let _p = parts.next();
                if parts.next() != Some("cnf") {
                    return Err(err::ParseError::ProblemSpecification.into());
                }
                let variables: usize = match parts.next().and_then(|part| part.parse().ok()) {
                    Some(count) => count,
                    None => return Err(err::ParseError::ProblemSpecification.into()),
                };
                while self.vars.var_count() < variables {
                    self.fresh_var(None, true);
                }
                continue;
            }

            for token in line.split_whitespace() {
                let int: i64 = match token.parse() {
                    Ok(int) => int,
                    Err(_) => return Err(err::ParseError::Line(line_number + 1).into()),
                };

                if int == 0 {
                    if !self.add_clause(&clause)? {
                        still_consistent = false;
                    }
                    clause.clear();
                } else {
                    let literal = Lit::from_int(int);
                    while (literal.var() as usize) >= self.vars.var_count() {
                        self.fresh_var(None, true);
                    }
                    clause.push(literal);
                }
            }
        }

        if !clause.is_empty() {
            if !self.add_clause(&clause)? {
                still_consistent = false;
            }
        }

        Ok(still_consistent)
    }

    /// Writes the live formula, with the given assumptions as unit clauses, in DIMACS form.
    ///
    /// Clauses satisfied at the root are elided, false literals are elided, and surviving variables are remapped densely from 1.
    pub fn write_dimacs(
        &self,
        writer: &mut impl Write,
        assumptions: &[Lit],
    ) -> std::io::Result<()> {
        use crate::context::ContextState;

        // A contradictory formula is exported as one.
        if self.state == ContextState::Unsatisfiable {
            return writeln!(writer, "p cnf 1 2\n1 0\n-1 0");
        }

        fn map_var(var: Var, map: &mut [Option<Var>], mapped: &mut Var) -> Var {
            match map[var as usize] {
                Some(remapped) => remapped,
                None => {
                    let remapped = *mapped;
                    map[var as usize] = Some(remapped);
                    *mapped += 1;
                    remapped
                }
            }
        }

        let mut map: Vec<Option<Var>> = vec![None; self.vars.var_count()];
        let mut mapped: Var = 0;

        let live: Vec<Vec<Lit>> = self
            .clause_db
            .originals
            .iter()
            .filter_map(|key| {
                let clause = self.clause_db.arena.get(*key)?;
                if clause
                    .literal_slice()
                    .iter()
                    .any(|literal| self.vars.value_of_lit(*literal) == Some(true))
                {
                    return None;
                }
                Some(
                    clause
                        .literal_slice()
                        .iter()
                        .filter(|literal| self.vars.value_of_lit(**literal) != Some(false))
                        .copied()
                        .collect(),
                )
            })
            .collect();

        for clause in &live {
            for literal in clause {
                map_var(literal.var(), &mut map, &mut mapped);
            }
        }
        for assumption in assumptions {
            map_var(assumption.var(), &mut map, &mut mapped);
        }

        writeln!(writer, "p cnf {} {}", mapped, live.len() + assumptions.len())?;

        for assumption in assumptions {
            debug_assert!(self.vars.value_of_lit(*assumption) != Some(false));
            let remapped = map_var(assumption.var(), &mut map, &mut mapped);
            let out = Lit::new(remapped, assumption.polarity());
            writeln!(writer, "{} 0", out.as_int())?;
        }

        for clause in &live {
            let remapped: Vec<Lit> = clause
                .iter()
                .map(|literal| {
                    Lit::new(
                        map_var(literal.var(), &mut map, &mut mapped),
                        literal.polarity(),
                    )
                })
                .collect();
            writeln!(writer, "{}", remapped.as_dimacs())?;
        }

        Ok(())
    }
}
