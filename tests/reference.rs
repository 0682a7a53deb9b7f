//! Cross-checks against an exhaustive reference on small random formulas.
//!
//! Verdicts must agree with brute force, and every satisfiable verdict must come with a model
//! satisfying every original clause.

use marten_sat::{config::Config, context::Context, reports::Report, structures::literal::Lit};

/// A small deterministic generator, so failures reproduce.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Clauses as signed integers, 1-indexed.
fn random_formula(seed: u64, var_count: u64) -> Vec<Vec<i64>> {
    let mut rng = XorShift(seed.wrapping_mul(2654435761).wrapping_add(1));
    let clause_count = 4 + rng.below(3 * var_count);

    (0..clause_count)
        .map(|_| {
            let width = 1 + rng.below(3);
            (0..width)
                .map(|_| {
                    let var = 1 + rng.below(var_count) as i64;
                    match rng.below(2) {
                        0 => var,
                        _ => -var,
                    }
                })
                .collect()
        })
        .collect()
}

fn brute_force_satisfiable(var_count: u64, clauses: &[Vec<i64>]) -> bool {
    (0..(1_u64 << var_count)).any(|assignment| {
        clauses.iter().all(|clause| {
            clause.iter().any(|&literal| {
                let value = (assignment >> (literal.unsigned_abs() - 1)) & 1 == 1;
                if literal > 0 {
                    value
                } else {
                    !value
                }
            })
        })
    })
}

fn solve_formula(config: Config, var_count: u64, clauses: &[Vec<i64>]) -> (Context, Report) {
    let mut ctx = Context::from_config(config);
    for _ in 0..var_count {
        ctx.fresh_var(None, true);
    }
    for clause in clauses {
        let literals: Vec<Lit> = clause.iter().map(|&int| Lit::from_int(int)).collect();
        let _ = ctx.add_clause(&literals).expect("registered variables only");
    }
    let report = ctx.solve().expect("no resource failure");
    (ctx, report)
}

fn check_against_reference(config: impl Fn() -> Config, seeds: std::ops::Range<u64>) {
    for seed in seeds {
        let var_count = 4 + seed % 5;
        let clauses = random_formula(seed, var_count);
        let expected = brute_force_satisfiable(var_count, &clauses);

        let (ctx, report) = solve_formula(config(), var_count, &clauses);

        match expected {
            true => {
                assert_eq!(report, Report::Satisfiable, "disagreement on seed {seed}");
                // The model must satisfy every original clause.
                for clause in &clauses {
                    let satisfied = clause.iter().any(|&literal| {
                        let value = ctx.value_of(Lit::from_int(literal).var());
                        value == Some(literal > 0)
                    });
                    assert!(satisfied, "model violates a clause on seed {seed}");
                }
            }
            false => {
                assert_eq!(report, Report::Unsatisfiable, "disagreement on seed {seed}");
            }
        }
    }
}

#[test]
fn default_configuration_agrees_with_brute_force() {
    check_against_reference(Config::default, 0..120);
}

#[test]
fn search_only_agrees_with_brute_force() {
    check_against_reference(
        || {
            let mut cfg = Config::default();
            cfg.lucky = false;
            cfg
        },
        0..120,
    );
}

#[test]
fn minimization_modes_agree() {
    use marten_sat::config::MinimizationMode;

    for mode in [
        MinimizationMode::None,
        MinimizationMode::Local,
        MinimizationMode::Recursive,
    ] {
        check_against_reference(
            || {
                let mut cfg = Config::default();
                cfg.lucky = false;
                cfg.minimization = mode;
                cfg
            },
            0..60,
        );
    }
}

#[test]
fn phase_saving_modes_agree() {
    use marten_sat::config::PhaseSavingMode;

    for mode in [
        PhaseSavingMode::None,
        PhaseSavingMode::Limited,
        PhaseSavingMode::Full,
    ] {
        check_against_reference(
            || {
                let mut cfg = Config::default();
                cfg.lucky = false;
                cfg.phase_saving = mode;
                cfg
            },
            0..60,
        );
    }
}

#[test]
fn geometric_restarts_agree() {
    use marten_sat::config::RestartSchedule;

    check_against_reference(
        || {
            let mut cfg = Config::default();
            cfg.lucky = false;
            cfg.restarts = RestartSchedule::Geometric;
            cfg.restart_first.set(2);
            cfg
        },
        0..60,
    );
}

#[test]
fn random_decisions_agree() {
    check_against_reference(
        || {
            let mut cfg = Config::default();
            cfg.lucky = false;
            cfg.random_var_freq.set(0.3);
            cfg.random_polarity = true;
            cfg
        },
        0..60,
    );
}
