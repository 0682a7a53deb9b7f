//! Configuration structures for the databases.
//!
//! Cloned from the primary [Config](crate::config::Config) when a database is created.

use crate::config::ConfigOption;

/// Configuration for the clause database.
#[derive(Clone)]
pub struct ClauseDBConfig {
    /// The clause activity decay factor.
    pub clause_decay: ConfigOption<f64>,

    /// The fraction of wasted arena space allowed before garbage collection is triggered.
    pub garbage_frac: ConfigOption<f64>,

    /// A floor on the learned clause cap.
    pub min_learnts: usize,

    /// Initial learned clause cap, as a fraction of the original clause count.
    pub learnt_cap_factor: f64,

    /// Growth factor of the learned clause cap.
    pub learnt_cap_inc: f64,

    /// Conflicts before the first cap adjustment.
    pub cap_adjust_start: f64,

    /// Growth factor of the adjustment interval.
    pub cap_adjust_inc: f64,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            clause_decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 1.0,
                value: 0.999,
            },

            garbage_frac: ConfigOption {
                name: "garbage_frac",
                min: 0.0,
                max: f64::MAX,
                value: 0.20,
            },

            min_learnts: 0,

            learnt_cap_factor: 1.0 / 3.0,
            learnt_cap_inc: 1.1,
            cap_adjust_start: 100.0,
            cap_adjust_inc: 1.5,
        }
    }
}

/// Configuration for the variable database.
#[derive(Clone)]
pub struct VarDBConfig {
    /// The variable activity decay factor.
    pub var_decay: ConfigOption<f64>,

    /// The decay factor of the early-index activity channel.
    pub early_decay: ConfigOption<f64>,

    /// Bump early-index variables currently assigned true through the second activity channel.
    pub early_bump: bool,

    /// The fraction of the variable index range treated as 'early'.
    pub early_fraction: ConfigOption<f64>,

    /// Randomize the initial activity of fresh variables.
    pub random_init_activity: bool,

    /// The default polarity of early-index variables with no saved phase.
    pub default_polarity: bool,
}

impl Default for VarDBConfig {
    fn default() -> Self {
        VarDBConfig {
            var_decay: ConfigOption {
                name: "var_decay",
                min: 0.0,
                max: 1.0,
                value: 0.95,
            },

            early_decay: ConfigOption {
                name: "early_decay",
                min: 0.0,
                max: 1.0,
                value: 0.995,
            },

            early_bump: true,

            early_fraction: ConfigOption {
                name: "early_fraction",
                min: 0.0,
                max: 1.0,
                value: 1.0 / 3.0,
            },

            random_init_activity: false,

            default_polarity: false,
        }
    }
}
