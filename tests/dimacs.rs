use marten_sat::{config::Config, context::Context, reports::Report, structures::literal::Lit};

mod reading {
    use super::*;

    #[test]
    fn formula_with_header() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = "c an unsatisfiable pair of pairs\np cnf 2 4\n1 2 0\n-1 2 0\n-1 -2 0\n1 -2 0\n";

        assert_eq!(ctx.read_dimacs(dimacs.as_bytes()), Ok(true));
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn formula_without_header() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = "1 -2 0\n2 0\n";

        assert_eq!(ctx.read_dimacs(dimacs.as_bytes()), Ok(true));
        assert_eq!(ctx.vars.var_count(), 2);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(0), Some(true));
        assert_eq!(ctx.value_of(1), Some(true));
    }

    #[test]
    fn contradiction_is_noted() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = "1 0\n-1 0\n";

        assert_eq!(ctx.read_dimacs(dimacs.as_bytes()), Ok(false));
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn junk_is_rejected() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.read_dimacs("1 two 0\n".as_bytes()).is_err());
    }
}

mod writing {
    use super::*;

    #[test]
    fn export_round_trips() {
        let mut ctx = Context::from_config(Config::default());
        let dimacs = "p cnf 3 3\n1 2 0\n-1 3 0\n-2 -3 0\n";
        assert_eq!(ctx.read_dimacs(dimacs.as_bytes()), Ok(true));

        let mut exported = Vec::new();
        ctx.write_dimacs(&mut exported, &[]).unwrap();

        let mut reread = Context::from_config(Config::default());
        assert_eq!(reread.read_dimacs(exported.as_slice()), Ok(true));
        assert_eq!(reread.clause_db.original_count(), 3);
        assert_eq!(reread.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn root_satisfied_clauses_are_elided() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);
        let c = ctx.fresh_var(None, true);

        let _ = ctx.add_clause(&[Lit::new(a, true)]);
        let _ = ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true)]);
        let _ = ctx.add_clause(&[Lit::new(b, true), Lit::new(c, true)]);

        let mut exported = Vec::new();
        ctx.write_dimacs(&mut exported, &[]).unwrap();
        let text = String::from_utf8(exported).unwrap();

        // Only the clause not settled by the root assignment survives.
        assert!(text.starts_with("p cnf 2 1\n"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn contradictory_context_exports_a_contradiction() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let _ = ctx.add_clause(&[Lit::new(a, true)]);
        let _ = ctx.add_clause(&[Lit::new(a, false)]);

        let mut exported = Vec::new();
        ctx.write_dimacs(&mut exported, &[]).unwrap();

        let mut reread = Context::from_config(Config::default());
        assert_eq!(reread.read_dimacs(exported.as_slice()), Ok(false));
    }

    #[test]
    fn assumptions_export_as_units() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);
        let _ = ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true)]);

        let mut exported = Vec::new();
        ctx.write_dimacs(&mut exported, &[Lit::new(a, false)]).unwrap();
        let text = String::from_utf8(exported).unwrap();

        assert!(text.contains("p cnf 2 2"));
        assert!(text.contains("-1 0"));
    }
}
