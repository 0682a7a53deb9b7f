/*!
The context — to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is parameterised to a source of randomness.
The concrete [Context] fixes the source to a seedable PCG32, so [from_config](Context::from_config) needs only a configuration.

# Example

```rust
# use marten_sat::config::Config;
# use marten_sat::context::Context;
# use marten_sat::reports::Report;
# use marten_sat::structures::literal::Lit;
let mut ctx = Context::from_config(Config::default());

let p = ctx.fresh_var(None, true);
let q = ctx.fresh_var(None, true);

assert!(ctx.add_clause(&[Lit::new(p, true), Lit::new(q, true)]).is_ok());
assert!(ctx.add_clause(&[Lit::new(p, false)]).is_ok());

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

assert_eq!(ctx.value_of(p), Some(false));
assert_eq!(ctx.value_of(q), Some(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula is known to be consistent, with a complete valuation found.
    Satisfiable,

    /// The formula is known to be inconsistent, independent of any assumptions.
    ///
    /// This state is permanent: every subsequent solve returns unsatisfiable immediately.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
