/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Some structures clone parts of the configuration — notably the databases take their own sub-configs on construction.

Numeric knobs are wrapped in a [ConfigOption], which carries the external name and permitted range of the option alongside its value.
Modes with a handful of variants — clause minimization, phase saving, the restart schedule — are plain enums.
*/

mod minimization;
pub use minimization::MinimizationMode;

mod option;
pub use option::ConfigOption;

mod phase;
pub use phase::PhaseSavingMode;

mod restarts;
pub use restarts::RestartSchedule;

pub mod dbs;
use dbs::{ClauseDBConfig, VarDBConfig};

/// Activity, as used for variables and clauses.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// Configuration of the variable database.
    pub var_db: VarDBConfig,

    /// The frequency with which the decision heuristic picks a variable at random.
    pub random_var_freq: ConfigOption<f64>,

    /// Seed for the source of randomness.
    pub random_seed: u64,

    /// Choose decision polarities at random.
    pub random_polarity: bool,

    /// How learned clauses are minimized during conflict analysis.
    pub minimization: MinimizationMode,

    /// How phases are saved on backjumps.
    pub phase_saving: PhaseSavingMode,

    /// Which sequence sets the conflict budget of each restart round.
    pub restarts: RestartSchedule,

    /// The base restart interval, in conflicts.
    pub restart_first: ConfigOption<u32>,

    /// Restart interval growth factor.
    pub restart_inc: ConfigOption<f64>,

    /// Probe simple assignments before search begins.
    pub lucky: bool,

    /// A wall-time limit for a solve, checked at call-count granularity.
    pub time_limit: Option<std::time::Duration>,

    /// Search iterations between checks of the wall clock, as checking every iteration is too expensive.
    pub time_check_interval: ConfigOption<u32>,

    /// A bound on conflicts across solves, after which a solve reports an unknown verdict.
    pub conflict_budget: Option<u64>,

    /// A bound on propagations across solves, after which a solve reports an unknown verdict.
    pub propagation_budget: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clause_db: ClauseDBConfig::default(),
            var_db: VarDBConfig::default(),

            random_var_freq: ConfigOption {
                name: "random_var_freq",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_seed: 91648253,

            random_polarity: false,

            minimization: MinimizationMode::Recursive,

            phase_saving: PhaseSavingMode::Full,

            restarts: RestartSchedule::Luby,

            restart_first: ConfigOption {
                name: "restart_first",
                min: 1,
                max: u32::MAX,
                value: 100,
            },

            restart_inc: ConfigOption {
                name: "restart_inc",
                min: 1.0,
                max: f64::MAX,
                value: 2.0,
            },

            lucky: true,

            time_limit: None,

            time_check_interval: ConfigOption {
                name: "time_check_interval",
                min: 1,
                max: u32::MAX,
                value: 128,
            },

            conflict_budget: None,
            propagation_budget: None,
        }
    }
}
