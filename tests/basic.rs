use marten_sat::{config::Config, context::Context, reports::Report, structures::literal::Lit};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_var(None, true);

        assert_eq!(ctx.add_clause(&[Lit::new(p, true)]), Ok(true));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p), Some(true));
    }

    #[test]
    fn single_clause_satisfiable() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);

        assert_eq!(ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true)]), Ok(true));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let satisfied = ctx.value_of(a) == Some(true) || ctx.value_of(b) == Some(true);
        assert!(satisfied);
    }

    #[test]
    fn unit_chain_unsatisfiable() {
        // 1 ∨ 2, -1 ∨ 2, -2: unit propagation forces 2 false, then 1 true, violating -1 ∨ 2.
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);

        assert_eq!(ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true)]), Ok(true));
        assert_eq!(ctx.add_clause(&[Lit::new(a, false), Lit::new(b, true)]), Ok(true));
        let _ = ctx.add_clause(&[Lit::new(b, false)]);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn complementary_units() {
        // 1, -1: contradiction surfaces during addition, before any solve.
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);

        assert_eq!(ctx.add_clause(&[Lit::new(a, true)]), Ok(true));
        assert_eq!(ctx.add_clause(&[Lit::new(a, false)]), Ok(false));

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        // The verdict is permanent, and repeated without re-searching.
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.conflicts, 0);
    }

    #[test]
    fn pigeonhole_two_into_one() {
        let mut ctx = Context::from_config(Config::default());
        let vars: Vec<_> = (0..4).map(|_| ctx.fresh_var(None, true)).collect();
        let [p1h1, p1h2, p2h1, p2h2] = vars.as_slice() else {
            panic!("insufficient variables");
        };

        // Each pigeon somewhere, no hole twice.
        let _ = ctx.add_clause(&[Lit::new(*p1h1, true), Lit::new(*p1h2, true)]);
        let _ = ctx.add_clause(&[Lit::new(*p2h1, true), Lit::new(*p2h2, true)]);
        let _ = ctx.add_clause(&[Lit::new(*p1h1, false), Lit::new(*p2h1, false)]);
        let _ = ctx.add_clause(&[Lit::new(*p1h2, false), Lit::new(*p2h2, false)]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        // Three pigeons into two holes is another matter.
        let p3h1 = ctx.fresh_var(None, true);
        let p3h2 = ctx.fresh_var(None, true);
        let _ = ctx.add_clause(&[Lit::new(p3h1, true), Lit::new(p3h2, true)]);
        let _ = ctx.add_clause(&[Lit::new(*p1h1, false), Lit::new(p3h1, false)]);
        let _ = ctx.add_clause(&[Lit::new(*p2h1, false), Lit::new(p3h1, false)]);
        let _ = ctx.add_clause(&[Lit::new(*p1h2, false), Lit::new(p3h2, false)]);
        let _ = ctx.add_clause(&[Lit::new(*p2h2, false), Lit::new(p3h2, false)]);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn solve_is_idempotent() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);
        let c = ctx.fresh_var(None, true);

        let _ = ctx.add_clause(&[Lit::new(a, true), Lit::new(b, false)]);
        let _ = ctx.add_clause(&[Lit::new(b, true), Lit::new(c, false)]);
        let _ = ctx.add_clause(&[Lit::new(c, true), Lit::new(a, false)]);

        let first = ctx.solve();
        let second = ctx.solve();
        assert_eq!(first, Ok(Report::Satisfiable));
        assert_eq!(first, second);
    }

    #[test]
    fn implied_clause_preserves_verdict() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);

        let _ = ctx.add_clause(&[Lit::new(a, true)]);
        let _ = ctx.add_clause(&[Lit::new(a, false), Lit::new(b, true)]);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        // 1 ∨ 2 is implied by 1 alone.
        assert!(ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true)]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(a), Some(true));
        assert_eq!(ctx.value_of(b), Some(true));
    }

    #[test]
    fn tautologies_are_skipped() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);

        assert_eq!(
            ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true), Lit::new(a, false)]),
            Ok(true)
        );
        assert_eq!(ctx.clause_db.original_count(), 0);
    }

    #[test]
    fn duplicate_literals_collapse() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);

        // 1 ∨ 1 ∨ 2 ∨ 2 stores as 1 ∨ 2.
        assert_eq!(
            ctx.add_clause(&[
                Lit::new(a, true),
                Lit::new(a, true),
                Lit::new(b, true),
                Lit::new(b, true)
            ]),
            Ok(true)
        );
        assert_eq!(ctx.clause_db.original_count(), 1);
    }

    #[test]
    fn unregistered_variable_is_rejected() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);

        assert!(ctx.add_clause(&[Lit::new(a, true), Lit::new(a + 1, true)]).is_err());
    }

    #[test]
    fn empty_formula_is_satisfiable() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_var(None, true);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }
}

mod search_heavy {
    use super::*;

    /// A configuration which skips the presolve, so verdicts come from the CDCL loop.
    fn search_config() -> Config {
        let mut cfg = Config::default();
        cfg.lucky = false;
        cfg
    }

    #[test]
    fn pigeonhole_three_into_two_by_search() {
        let mut ctx = Context::from_config(search_config());
        let vars: Vec<_> = (0..6).map(|_| ctx.fresh_var(None, true)).collect();
        let hole = |pigeon: usize, hole: usize| Lit::new(vars[pigeon * 2 + hole], true);
        let not_hole = |pigeon: usize, h: usize| Lit::new(vars[pigeon * 2 + h], false);

        for pigeon in 0..3 {
            let _ = ctx.add_clause(&[hole(pigeon, 0), hole(pigeon, 1)]);
        }
        for h in 0..2 {
            for one in 0..3 {
                for two in (one + 1)..3 {
                    let _ = ctx.add_clause(&[not_hole(one, h), not_hole(two, h)]);
                }
            }
        }

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.conflicts > 0);
    }

    #[test]
    fn xor_chain_satisfiable() {
        // x1 ⊕ x2 = 1, x2 ⊕ x3 = 1, … encoded clausally; satisfiable by alternation.
        let mut ctx = Context::from_config(search_config());
        let vars: Vec<_> = (0..8).map(|_| ctx.fresh_var(None, true)).collect();

        for pair in vars.windows(2) {
            let (x, y) = (pair[0], pair[1]);
            let _ = ctx.add_clause(&[Lit::new(x, true), Lit::new(y, true)]);
            let _ = ctx.add_clause(&[Lit::new(x, false), Lit::new(y, false)]);
        }

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        for pair in vars.windows(2) {
            assert_ne!(ctx.value_of(pair[0]), ctx.value_of(pair[1]));
        }
    }
}

mod lucky {
    use super::*;

    #[test]
    fn all_true_is_lucky() {
        let mut ctx = Context::from_config(Config::default());
        let vars: Vec<_> = (0..6).map(|_| ctx.fresh_var(None, true)).collect();

        for pair in vars.windows(2) {
            let _ = ctx.add_clause(&[Lit::new(pair[0], true), Lit::new(pair[1], true)]);
        }

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        // No search was needed.
        assert_eq!(ctx.counters.decisions, 0);
        assert_eq!(ctx.counters.conflicts, 0);
    }

    #[test]
    fn horn_program_solved_without_search() {
        // Definite clauses: a; a → b; a ∧ b → c.
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);
        let c = ctx.fresh_var(None, true);

        let _ = ctx.add_clause(&[Lit::new(a, true)]);
        let _ = ctx.add_clause(&[Lit::new(a, false), Lit::new(b, true)]);
        let _ = ctx.add_clause(&[Lit::new(a, false), Lit::new(b, false), Lit::new(c, true)]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(a), Some(true));
        assert_eq!(ctx.value_of(b), Some(true));
        assert_eq!(ctx.value_of(c), Some(true));
        assert_eq!(ctx.counters.decisions, 0);
    }
}
