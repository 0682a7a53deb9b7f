//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! marten_sat is a conflict-driven clause-learning (CDCL) solver core.
//! It is written to be embedded: an external layer builds a formula over integer-indexed variables, calls [solve](crate::context::GenericContext::solve) (perhaps repeatedly, perhaps under assumptions), and reads back a verdict together with a model or a set of failed assumptions.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! A context owns every mutable part of a solve:
//! - A formula, stored in a [clause database](crate::db::clause) backed by a relocating arena.
//! - A valuation together with activities, phases, and reasons, stored in a [variable database](crate::db::variable).
//! - The [trail](crate::db::trail) of assignments, and [watch lists](crate::db::watches) keyed by literal.
//!
//! The algorithm for determining satisfiability is factored into a collection of [procedures]:
//! boolean constraint propagation, conflict analysis with clause minimization, backjumping, decision, clause database reduction, root simplification, garbage collection, and a lucky-phase presolve.
//!
//! # Example
//!
//! ```rust
//! use marten_sat::config::Config;
//! use marten_sat::context::Context;
//! use marten_sat::reports::Report;
//! use marten_sat::structures::literal::Lit;
//!
//! let mut ctx = Context::from_config(Config::default());
//!
//! let p = ctx.fresh_var(None, true);
//! let q = ctx.fresh_var(None, true);
//!
//! assert!(ctx.add_clause(&[Lit::new(p, true), Lit::new(q, true)]).is_ok());
//! assert!(ctx.add_clause(&[Lit::new(p, false)]).is_ok());
//!
//! assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
//! assert_eq!(ctx.value_of(q), Some(true));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, narrowed by the targets listed in [misc::log].
//! No log implementation is bundled.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
pub mod reports;
