use rand::SeedableRng;

use crate::{
    config::Config,
    db::{clause::ClauseDB, trail::Trail, variable::VarDB, watches::Watches},
    generic::random::MinimalPCG32,
    procedures::analysis::Analyzer,
};

use super::{ContextState, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The source of randomness is seeded from [random_seed](Config::random_seed), so a configuration fixes the solve.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.random_seed.to_le_bytes());
        Self {
            vars: VarDB::new(&config),
            clause_db: ClauseDB::new(&config),
            watches: Watches::default(),
            trail: Trail::default(),
            analyzer: Analyzer::default(),

            config,

            assumptions: Vec::default(),
            failed_assumptions: Vec::default(),
            model: Vec::default(),

            counters: Counters::default(),
            rng,
            state: ContextState::Configuration,

            terminate: None,
            solve_start: None,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
