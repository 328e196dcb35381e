//! Numerical solvers for the Wolfpack framework.
//!
//! - [`optimization`]: derivative-free search for the minimum or maximum of
//!   an [`Objective`] over a bounded box
//!
//! [`Objective`]: wolfpack_core::Objective

pub mod optimization;
