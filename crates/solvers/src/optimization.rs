//! Solvers for optimization problems: minimizing or maximizing an objective.
//!
//! An [`Objective`] maps a point `x: &[f64]` of an axis-aligned box to a
//! scalar. Solvers in this module search the box for the `x` that minimizes or
//! maximizes that scalar, using only objective evaluations.
//!
//! Every solver minimizes internally. The search direction is a [`Goal`],
//! which transforms objective values before they are compared so that one
//! implementation serves both directions.
//!
//! # Solvers
//!
//! - [`grey_wolf`]: population-based search led by the three best candidates
//!   seen so far, for multimodal objectives in any number of dimensions
//!
//! [`Objective`]: wolfpack_core::Objective

mod goal;

pub use goal::{Goal, Maximize, Minimize};

pub mod grey_wolf;
