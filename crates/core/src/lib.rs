//! Core traits for the Wolfpack framework.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`]: a scalar function over a point in a real search space
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::Objective;
pub use observer::Observer;
