use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use marten_sat::{config::Config, context::Context, reports::Report, structures::literal::Lit};

/// A configuration which skips the presolve, so budgets are seen by the search loop.
fn search_config() -> Config {
    let mut cfg = Config::default();
    cfg.lucky = false;
    cfg
}

mod budgets {
    use super::*;

    #[test]
    fn exhausted_budget_is_unknown_then_recoverable() {
        let mut cfg = search_config();
        cfg.conflict_budget = Some(0);
        let mut ctx = Context::from_config(cfg);

        // Fifty independent clauses over fresh variable triples.
        for _ in 0..50 {
            let a = ctx.fresh_var(None, true);
            let b = ctx.fresh_var(None, true);
            let c = ctx.fresh_var(None, true);
            let _ = ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true), Lit::new(c, true)]);
        }

        assert_eq!(ctx.solve(), Ok(Report::Unknown));

        // Learned state and formula survive; an unbounded call settles the verdict.
        ctx.config.conflict_budget = None;
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        for var in 0..ctx.vars.var_count() as u32 {
            assert!(ctx.value_of(var).is_some());
        }
    }

    #[test]
    fn propagation_budget_is_unknown() {
        let mut cfg = search_config();
        cfg.propagation_budget = Some(0);
        let mut ctx = Context::from_config(cfg);

        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);
        let _ = ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true)]);

        assert_eq!(ctx.solve(), Ok(Report::Unknown));

        ctx.config.propagation_budget = None;
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }
}

mod cancellation {
    use super::*;

    #[test]
    fn preset_flag_cancels_search() {
        let mut ctx = Context::from_config(search_config());
        let flag = Arc::new(AtomicBool::new(true));
        ctx.set_terminate_flag(flag.clone());

        let a = ctx.fresh_var(None, true);
        let b = ctx.fresh_var(None, true);
        let _ = ctx.add_clause(&[Lit::new(a, true), Lit::new(b, true)]);

        assert_eq!(ctx.solve(), Ok(Report::Unknown));

        flag.store(false, Ordering::Relaxed);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn preset_flag_cancels_presolve() {
        let mut ctx = Context::from_config(Config::default());
        let flag = Arc::new(AtomicBool::new(true));
        ctx.set_terminate_flag(flag.clone());

        let a = ctx.fresh_var(None, true);
        let _ = ctx.add_clause(&[Lit::new(a, true)]);
        let b = ctx.fresh_var(None, true);
        let c = ctx.fresh_var(None, true);
        let _ = ctx.add_clause(&[Lit::new(b, true), Lit::new(c, true)]);

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
    }
}
